use cidstamp_fs::{Error, TempWorkspace, atomic_write, read};
use tempfile::tempdir;

#[test]
fn test_purposes_use_distinct_directories() {
    let root = tempdir().unwrap();
    let preview = TempWorkspace::new(root.path(), "preview");
    let extraction = TempWorkspace::new(root.path(), "extraction");
    assert_ne!(preview.path(), extraction.path());

    let mut a = preview.acquire().unwrap();
    let mut b = extraction.acquire().unwrap();
    let pa = a.dir().join("photo.jpg");
    let pb = b.dir().join("photo.jpg");
    std::fs::write(&pa, b"preview copy").unwrap();
    std::fs::write(&pb, b"extraction copy").unwrap();
    a.claim(&pa).unwrap();
    b.claim(&pb).unwrap();

    drop(a);
    assert!(!pa.exists());
    assert_eq!(read(&pb).unwrap(), b"extraction copy");
    drop(b);
    assert!(!pb.exists());
}

#[test]
fn test_scoped_returns_consumer_value() {
    let root = tempdir().unwrap();
    let ws = TempWorkspace::new(root.path(), "preview");

    let bytes = ws
        .scoped(|slot| -> Result<Vec<u8>, Error> {
            let path = slot.dir().join("payload.txt");
            atomic_write(&path, b"payload").unwrap();
            slot.claim(path)?;
            slot.read()
        })
        .unwrap();

    assert_eq!(bytes, b"payload");
    assert_eq!(std::fs::read_dir(ws.path()).unwrap().count(), 0);
}

#[test]
fn test_unwritable_root_surfaces_write_error() {
    let root = tempdir().unwrap();
    let blocker = root.path().join("file");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let ws = TempWorkspace::new(&blocker, "preview");
    assert!(matches!(ws.acquire(), Err(Error::Write { .. })));
}
