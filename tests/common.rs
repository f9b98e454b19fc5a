#![cfg(unix)]
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::Result;
use bon::builder;

pub const COMMAND: &str = env!("CARGO_BIN_EXE_varsub");

pub const METADATA_HEADER: &str = "strain\tdate\tcountry";

pub fn metadata_row(idx: usize) -> String {
    format!("id{idx}\t2021-0{}-01\tcountry{}", idx % 9 + 1, idx % 3)
}

fn write_fasta_to<W: Write>(wtr: &mut W, id: &str, seq: &[u8]) -> Result<()> {
    writeln!(wtr, ">{id} synthetic")?;
    wtr.write_all(seq)?;
    writeln!(wtr)?;
    Ok(())
}

/// Writes `<root>/<variant>/<variant>.fasta` with records `id1..=idN` and a
/// metadata table with one row per record plus an unrelated row.
#[builder]
pub fn write_variant(
    root: &Path,
    variant: &str,
    #[builder(default = 3)] nrec: usize,
    #[builder(default = 60)] slen: usize,
) -> Result<PathBuf> {
    let dir = root.join(variant);
    fs::create_dir_all(&dir)?;

    let mut handle = fs::File::create(dir.join(format!("{variant}.fasta")))?;
    let mut seqgen = nucgen::Sequence::with_capacity(slen);
    let mut rng = rand::rng();
    for idx in 1..=nrec {
        seqgen.clear_buffer();
        seqgen.fill_buffer(&mut rng, slen);
        let seq = seqgen.bytes();
        write_fasta_to(&mut handle, &format!("id{idx}"), &seq)?;
    }
    handle.flush()?;

    let mut table = vec![METADATA_HEADER.to_string()];
    table.extend((1..=nrec).map(metadata_row));
    table.push("unrelated\t2021-01-01\tnowhere".to_string());
    fs::write(
        dir.join(format!("{variant}.metadata.tsv")),
        table.join("\n") + "\n",
    )?;
    Ok(dir)
}

pub struct FakeTools {
    pub augur: PathBuf,
    pub seqkit: PathBuf,
    /// Every augur invocation, one line each
    pub log: PathBuf,
}
impl FakeTools {
    pub fn args(&self) -> Vec<String> {
        vec![
            "--augur".to_string(),
            self.augur.display().to_string(),
            "--seqkit".to_string(),
            self.seqkit.display().to_string(),
        ]
    }

    pub fn invocations(&self) -> String {
        fs::read_to_string(&self.log).unwrap_or_default()
    }
}

fn write_script(path: &Path, body: &str) -> Result<()> {
    fs::write(path, body)?;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

/// Shell stand-ins for `augur` and `seqkit`.
///
/// The fake filter keeps exactly the records listed in `keep`.
#[builder]
pub fn write_fake_tools(
    dir: &Path,
    #[builder(default)] keep: &[&str],
    index_exit: Option<i32>,
) -> Result<FakeTools> {
    let augur = dir.join("augur");
    let seqkit = dir.join("seqkit");
    let log = dir.join("augur.log");

    let index_body = match index_exit {
        Some(code) => format!("echo 'index failed' >&2; exit {code}"),
        None => "grep '^>' \"$seqs\" | sed 's/^>//' > \"$out\"".to_string(),
    };
    let script = format!(
        r#"#!/bin/sh
echo "$*" >> '{log}'
cmd="$1"; shift
while [ $# -gt 0 ]; do
    case "$1" in
        --sequences) seqs="$2"; shift 2 ;;
        --output|--output-sequences) out="$2"; shift 2 ;;
        *) shift ;;
    esac
done
case "$cmd" in
    index)
        {index_body}
        ;;
    filter)
        awk -v keep='{keep}' 'BEGIN {{ n = split(keep, k, ","); for (i = 1; i <= n; i++) want[k[i]] = 1 }}
            /^>/ {{ id = substr($1, 2); p = (id in want) }}
            p' "$seqs" > "$out"
        ;;
    *)
        echo "unknown command $cmd" >&2; exit 64 ;;
esac
"#,
        log = log.display(),
        keep = keep.join(","),
    );
    write_script(&augur, &script)?;

    write_script(
        &seqkit,
        r#"#!/bin/sh
for last; do :; done
grep '^>' "$last" | sed 's/^>//; s/[[:space:]].*//'
"#,
    )?;

    Ok(FakeTools { augur, seqkit, log })
}

pub fn run_varsub<I, S>(args: I) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Ok(Command::new(COMMAND).args(args).output()?)
}
