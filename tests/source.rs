use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use currenscript::{
    error::Error,
    interpreter::{
        source::{FileSource, Source},
        value::core::Value,
    },
    run_files,
};

const CONFIG: &str = "PLN EUR;\nPLN 1.0 0.25\nEUR 4.0 1.0\n";

/// A file in the system temp directory, removed again on drop.
struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(name: &str, contents: &[u8]) -> Self {
        let path = std::env::temp_dir().join(format!("currenscript-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap_or_else(|e| panic!("Failed to write {path:?}: {e}"));
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn read_all(mut source: impl Source) -> String {
    let mut text = String::new();
    while let Some(c) = source.next_char() {
        text.push(c);
    }
    text
}

fn run_program(name: &str, program: &[u8]) -> Result<Option<Value>, Error> {
    let config = TempFile::new(&format!("{name}.cfg"), CONFIG.as_bytes());
    let program = TempFile::new(&format!("{name}.cur"), program);
    run_files(config.path(), program.path())
}

fn assert_invalid_utf8(result: Result<Option<Value>, Error>) {
    match result {
        Err(Error::Io { source, .. }) => assert_eq!(source.kind(), ErrorKind::InvalidData),
        other => panic!("expected an invalid data error, got {other:?}"),
    }
}

#[test]
fn file_source_yields_every_character() {
    let file = TempFile::new("chars.cur", "a\n\"zł\" €".as_bytes());
    let source = FileSource::open(file.path()).unwrap();

    assert_eq!(read_all(source), "a\n\"zł\" €");
}

#[test]
fn file_source_is_exhausted_for_good() {
    let file = TempFile::new("exhausted.cur", b"x");
    let mut source = FileSource::open(file.path()).unwrap();

    assert_eq!(source.next_char(), Some('x'));
    assert_eq!(source.next_char(), None);
    assert_eq!(source.next_char(), None);
}

#[test]
fn file_is_released_after_open() {
    let file = TempFile::new("released.cur", b"int main() { return 1; }");
    let source = FileSource::open(file.path()).unwrap();

    fs::remove_file(file.path()).unwrap();
    assert_eq!(read_all(source), "int main() { return 1; }");
}

#[test]
fn runs_program_files() {
    let program = b"# entry\nPLN main() {\n    EUR e = 2.0 as EUR;\n    return e as PLN;\n}\n";
    let result = run_program("convert", program).unwrap();

    assert_eq!(result.map(|v| v.to_string()), Some("8 PLN".into()));
}

#[test]
fn missing_files_are_io_errors() {
    let config = TempFile::new("only.cfg", CONFIG.as_bytes());
    let missing = std::env::temp_dir().join("currenscript-does-not-exist.cur");

    let error = run_files(config.path(), &missing).unwrap_err();

    assert_eq!(error.category(), "IoError");
    assert!(matches!(&error, Error::Io { path, .. } if *path == missing));
}

#[test]
fn invalid_utf8_in_a_comment_is_rejected() {
    let program = b"int main() {\n    int x = 1;\n    # caf\xE9\n    x = 2;\n    return x;\n}\n";
    assert_invalid_utf8(run_program("comment", program));
}

#[test]
fn invalid_utf8_in_a_string_is_rejected() {
    let program = b"string main() { return \"a\xFFb\"; }";
    assert_invalid_utf8(run_program("string", program));
}

#[test]
fn truncated_sequence_at_end_of_file_is_rejected() {
    let program = b"int main() { return 1; }\n# \xE2\x82";
    assert_invalid_utf8(run_program("truncated", program));
}

#[test]
fn valid_multibyte_text_runs() {
    let program = "int main() {\n    int x = 1;\n    # café\n    x = 2;\n    return x;\n}\n";
    assert_eq!(run_program("cafe", program.as_bytes()).unwrap(), Some(Value::Integer(2)));
}
