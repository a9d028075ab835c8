use release_feed::writer::write_feed;
use tempfile::tempdir;

#[tokio::test]
async fn test_creates_nested_output_directories() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("public").join("feeds").join("feed.xml");

    write_feed(&path, "<rss/>").await.expect("write should succeed");

    let written = std::fs::read_to_string(&path).expect("read back feed");
    assert_eq!(written, "<rss/>");
}

#[tokio::test]
async fn test_overwrites_existing_output() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("feed.xml");

    write_feed(&path, "first run").await.expect("first write");
    write_feed(&path, "second run").await.expect("second write");

    let written = std::fs::read_to_string(&path).expect("read back feed");
    assert_eq!(written, "second run");
}

#[tokio::test]
async fn test_directory_creation_is_idempotent() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("out").join("feed.xml");

    write_feed(&path, "one").await.expect("first write");
    // Second write into the already-existing directory must not error.
    write_feed(&path, "two").await.expect("second write");
}
