use recordkit::{
    get_cats_info, parse_cats, summarize_salaries, total_salary_to, walk_tree, CatRecord,
    EntryKind, Recorder, RecordkitError, Style, Terminal, TreeBuilder,
};
use std::fs::{self, File};
use std::io::{Cursor, Write};
use tempfile::tempdir;
#[test]
fn test_salary_totals() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("salary.txt");
    fs::write(&path, "Alice,2000\nBob,2000\nCarol,2000\n").unwrap();
    let mut rec = Recorder::new();
    assert_eq!(total_salary_to(&path, &mut rec), (6000, 2000.0));
    assert!(rec.lines.is_empty());
}
#[test]
fn test_salary_skips_malformed_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("salary.txt");
    fs::write(&path, "Alice,1000\nDave,notanumber\nBob,3000\nno comma here\n").unwrap();
    let mut rec = Recorder::new();
    assert_eq!(total_salary_to(&path, &mut rec), (4000, 2000.0));
    assert_eq!(
        rec.lines,
        [
            (
                "Warning: Skipping malformed line: Dave,notanumber".to_string(),
                Style::Warning
            ),
            (
                "Warning: Skipping malformed line: no comma here".to_string(),
                Style::Warning
            ),
        ]
    );
}
#[test]
fn test_salary_extra_field_is_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("salary.txt");
    fs::write(&path, "Eve,100,200\nFrank, 300 \n").unwrap();
    let summary = summarize_salaries(&path).unwrap();
    assert_eq!(summary.totals(), (300, 300.0));
    assert_eq!(summary.count, 1);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].line_number, 1);
    assert_eq!(summary.skipped[0].line, "Eve,100,200");
}
#[test]
fn test_salary_empty_and_all_malformed() {
    let dir = tempdir().unwrap();
    let empty = dir.path().join("empty.txt");
    File::create(&empty).unwrap();
    let mut rec = Recorder::new();
    assert_eq!(total_salary_to(&empty, &mut rec), (0, 0.0));
    assert!(rec.lines.is_empty());

    let junk = dir.path().join("junk.txt");
    fs::write(&junk, "x\ny,z\n").unwrap();
    let mut rec = Recorder::new();
    assert_eq!(total_salary_to(&junk, &mut rec), (0, 0.0));
    assert_eq!(rec.lines.len(), 2);
    let summary = summarize_salaries(&junk).unwrap();
    assert_eq!(summary.count, 0);
    assert_eq!(summary.average, 0.0);
}
#[test]
fn test_salary_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    let mut rec = Recorder::new();
    assert_eq!(total_salary_to(&path, &mut rec), (0, 0.0));
    assert_eq!(rec.lines.len(), 1);
    let (message, style) = &rec.lines[0];
    assert_eq!(*style, Style::Error);
    assert!(message.starts_with("Error: File not found at path '"));
    assert!(message.contains("nope.txt"));
    assert!(matches!(
        summarize_salaries(&path),
        Err(RecordkitError::NotFound { .. })
    ));
}
#[test]
fn test_salary_invalid_utf8_is_unexpected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bin.txt");
    fs::write(&path, vec![b'A', b',', 0xff, 0xfe, b'\n']).unwrap();
    let mut rec = Recorder::new();
    assert_eq!(total_salary_to(&path, &mut rec), (0, 0.0));
    assert_eq!(rec.lines[0].1, Style::Error);
    assert!(rec.lines[0].0.starts_with("Unexpected error: "));
}
#[test]
fn test_salary_overflow() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("big.txt");
    fs::write(&path, format!("A,{}\nB,1\n", i64::MAX)).unwrap();
    assert!(matches!(
        summarize_salaries(&path),
        Err(RecordkitError::SalaryOverflow { line_number: 2 })
    ));
}
#[test]
fn test_cats_keep_order_and_text_age() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cats.txt");
    let mut f = File::create(&path).unwrap();
    writeln!(f, "60b90c1c13067a15887e1ae1,Tayson,3").unwrap();
    writeln!(f, "60b90c2413067a15887e1ae2,Vika,1").unwrap();
    writeln!(f, "60b90c2e13067a15887e1ae3,Barsik,2").unwrap();
    drop(f);
    let cats = get_cats_info(&path).unwrap();
    assert_eq!(cats.len(), 3);
    assert_eq!(
        cats[0],
        CatRecord {
            id: "60b90c1c13067a15887e1ae1".into(),
            name: "Tayson".into(),
            age: "3".into(),
        }
    );
    let names: Vec<_> = cats.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Tayson", "Vika", "Barsik"]);
    assert_eq!(cats[2].age, "2");
}
#[test]
fn test_cats_malformed_line_aborts() {
    let input = "1,Tom,4\n2,Jerry\n3,Felix,7\n";
    match parse_cats(Cursor::new(input)) {
        Err(RecordkitError::MalformedLine { line_number, line }) => {
            assert_eq!(line_number, 2);
            assert_eq!(line, "2,Jerry");
        }
        other => panic!("expected malformed line error, got {:?}", other),
    }
}
#[test]
fn test_cats_malformed_message() {
    let err = parse_cats(Cursor::new("a,b,c,d\n")).unwrap_err();
    assert_eq!(err.to_string(), "Malformed line 1: 'a,b,c,d'");
}
#[test]
fn test_cats_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let err = get_cats_info(&path).unwrap_err();
    assert!(matches!(err, RecordkitError::NotFound { .. }));
    assert!(err.to_string().contains("missing.txt"));
}
#[test]
fn test_cats_directory_is_processing_error() {
    let dir = tempdir().unwrap();
    let err = get_cats_info(dir.path()).unwrap_err();
    assert!(matches!(err, RecordkitError::Processing { .. }));
    assert!(err.to_string().starts_with("Error processing file: "));
}
#[test]
fn test_cats_read_failure_carries_path_only_from_file() {
    let bytes = vec![b'1', b',', 0xff, b',', b'2', b'\n'];
    match parse_cats(Cursor::new(bytes.clone())) {
        Err(RecordkitError::Processing { path, .. }) => assert!(path.is_none()),
        other => panic!("expected processing error, got {:?}", other),
    }
    let dir = tempdir().unwrap();
    let file = dir.path().join("cats.txt");
    fs::write(&file, bytes).unwrap();
    match get_cats_info(&file) {
        Err(RecordkitError::Processing { path, .. }) => assert_eq!(path, Some(file)),
        other => panic!("expected processing error, got {:?}", other),
    }
}
#[test]
fn test_cats_fields_not_trimmed() {
    let cats = parse_cats(Cursor::new("  7, Tom ,5  \n")).unwrap();
    assert_eq!(cats[0].id, "7");
    assert_eq!(cats[0].name, " Tom ");
    assert_eq!(cats[0].age, "5");
}
#[test]
fn test_walk_sorted_preorder() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    fs::write(dir.path().join("b/inner.txt"), "").unwrap();
    fs::write(dir.path().join("a.txt"), "").unwrap();
    fs::write(dir.path().join("c.txt"), "").unwrap();
    let entries = walk_tree(&TreeBuilder::new(dir.path()).build()).unwrap();
    let seen: Vec<_> = entries
        .iter()
        .map(|e| (e.name.as_str(), e.kind, e.depth))
        .collect();
    assert_eq!(
        seen,
        [
            ("a.txt", EntryKind::File, 1),
            ("b", EntryKind::Directory, 1),
            ("inner.txt", EntryKind::File, 2),
            ("c.txt", EntryKind::File, 1),
        ]
    );
}
#[test]
fn test_walk_max_depth_and_ignore() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/deep")).unwrap();
    fs::write(dir.path().join("src/deep/x.rs"), "").unwrap();
    fs::write(dir.path().join("debug.log"), "").unwrap();
    let options = TreeBuilder::new(dir.path())
        .max_depth(2)
        .ignore_patterns(vec!["*.log".into()])
        .build();
    let names: Vec<_> = walk_tree(&options)
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, ["src", "deep"]);
}
#[test]
fn test_walk_hidden_toggle() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".env"), "").unwrap();
    fs::write(dir.path().join("visible"), "").unwrap();
    let all = walk_tree(&TreeBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(all.len(), 2);
    let visible = walk_tree(&TreeBuilder::new(dir.path()).include_hidden(false).build()).unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "visible");
}
#[test]
fn test_walk_bad_glob() {
    let dir = tempdir().unwrap();
    let options = TreeBuilder::new(dir.path())
        .ignore_patterns(vec!["a[".into()])
        .build();
    assert!(matches!(walk_tree(&options), Err(RecordkitError::Walk(_))));
}
#[test]
fn test_walk_respects_gitignore() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "skip.txt\n").unwrap();
    fs::write(dir.path().join("skip.txt"), "").unwrap();
    fs::write(dir.path().join("keep.txt"), "").unwrap();
    let names = |respect: bool| -> Vec<String> {
        let options = TreeBuilder::new(dir.path())
            .respect_gitignore(respect)
            .build();
        walk_tree(&options)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect()
    };
    assert_eq!(names(false), [".gitignore", "keep.txt", "skip.txt"]);
    assert_eq!(names(true), [".gitignore", "keep.txt"]);
}
#[cfg(unix)]
#[test]
fn test_walk_descends_into_symlinked_directory() {
    use recordkit::print_tree;
    use std::os::unix::fs::symlink;
    let dir = tempdir().unwrap();
    let target = dir.path().join("target");
    let root = dir.path().join("root");
    fs::create_dir(&target).unwrap();
    fs::create_dir(&root).unwrap();
    fs::write(target.join("inside.txt"), "").unwrap();
    symlink(&target, root.join("link")).unwrap();

    let mut rec = Recorder::new();
    print_tree(&TreeBuilder::new(&root).build(), &mut rec).unwrap();
    assert_eq!(rec.texts(), ["root/", "    link/", "        inside.txt"]);

    let options = TreeBuilder::new(&root).follow_links(false).build();
    let entries = walk_tree(&options).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, EntryKind::Directory);
}
#[cfg(unix)]
#[test]
fn test_walk_lists_dangling_symlink_as_file() {
    use std::os::unix::fs::symlink;
    let dir = tempdir().unwrap();
    symlink(dir.path().join("missing"), dir.path().join("gone")).unwrap();
    fs::write(dir.path().join("real.txt"), "").unwrap();
    let entries = walk_tree(&TreeBuilder::new(dir.path()).build()).unwrap();
    let seen: Vec<_> = entries
        .iter()
        .map(|e| (e.name.as_str(), e.kind, e.depth))
        .collect();
    assert_eq!(
        seen,
        [("gone", EntryKind::File, 1), ("real.txt", EntryKind::File, 1)]
    );
}
#[test]
fn test_salary_messages_on_plain_terminal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("salary.txt");
    fs::write(&path, "Alice,100\nbroken\n").unwrap();
    let mut term = Terminal::new(Vec::new(), false);
    assert_eq!(total_salary_to(&path, &mut term), (100, 100.0));
    assert_eq!(
        String::from_utf8(term.into_inner()).unwrap(),
        "Warning: Skipping malformed line: broken\n"
    );
}
