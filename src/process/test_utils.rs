use std::io::Cursor;

use super::{files::FastQFile, read::FastQReader, write::FastQWriter};

pub(super) type MemFile = FastQFile<Cursor<Vec<u8>>, Vec<u8>>;

/// In memory input with an in memory output
pub(super) fn mem_file(name: &str, data: &str) -> MemFile {
    FastQFile::new(
        FastQReader::new(Cursor::new(data.as_bytes().to_vec())),
        FastQWriter::new(Vec::new()),
        name.into(),
        format!("{name}.filtered").into(),
    )
}

pub(super) fn output(f: MemFile) -> String {
    String::from_utf8(f.wrt.into_inner()).unwrap()
}
