use std::fs;

use tinyweb::http::files::StaticFiles;
use tinyweb::http::resolver::{resolve, Resolved};

fn site() -> (tempfile::TempDir, StaticFiles) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
    fs::write(dir.path().join("error400.html"), "bad").unwrap();
    fs::write(dir.path().join("error404.html"), "missing").unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs").join("notes.txt"), "notes").unwrap();

    let files = StaticFiles::new(dir.path(), "error400.html", "error404.html");
    (dir, files)
}

#[tokio::test]
async fn test_resolve_existing_file() {
    let (_dir, files) = site();

    assert_eq!(
        resolve("GET", "/index.html", &files).await,
        Resolved::File("index.html".to_string())
    );
    assert_eq!(
        resolve("HEAD", "/docs/notes.txt", &files).await,
        Resolved::File("docs/notes.txt".to_string())
    );
}

#[tokio::test]
async fn test_resolve_missing_file() {
    let (_dir, files) = site();
    assert_eq!(resolve("GET", "/missing.txt", &files).await, Resolved::NotFound);
}

#[tokio::test]
async fn test_resolve_other_methods_stay_bad_request() {
    let (_dir, files) = site();

    for method in ["POST", "PUT", "DELETE", "get", "BREW"] {
        assert_eq!(
            resolve(method, "/index.html", &files).await,
            Resolved::BadRequest,
            "{}",
            method
        );
    }
}

#[tokio::test]
async fn test_resolve_root_is_not_an_index() {
    let (_dir, files) = site();
    assert_eq!(resolve("GET", "/", &files).await, Resolved::BadRequest);
    assert_eq!(resolve("GET", "", &files).await, Resolved::BadRequest);
}

#[tokio::test]
async fn test_resolve_strips_only_one_slash() {
    let (_dir, files) = site();

    assert_eq!(
        resolve("GET", "index.html", &files).await,
        Resolved::File("index.html".to_string())
    );
    // "//index.html" becomes the absolute path "/index.html".
    assert_eq!(resolve("GET", "//index.html", &files).await, Resolved::NotFound);
}

#[tokio::test]
async fn test_resolve_error_pages_keep_their_status() {
    let (_dir, files) = site();

    assert_eq!(resolve("GET", "/error404.html", &files).await, Resolved::NotFound);
    assert_eq!(resolve("GET", "/error400.html", &files).await, Resolved::BadRequest);
}

#[tokio::test]
async fn test_resolve_directory_counts_as_existing() {
    let (_dir, files) = site();
    assert_eq!(
        resolve("GET", "/docs", &files).await,
        Resolved::File("docs".to_string())
    );
}

#[tokio::test]
async fn test_load_and_file_names() {
    let (_dir, files) = site();

    assert_eq!(files.file_name(&Resolved::BadRequest), "error400.html");
    assert_eq!(files.file_name(&Resolved::NotFound), "error404.html");
    assert_eq!(files.load(&Resolved::NotFound).await.unwrap(), b"missing".to_vec());
    assert_eq!(
        files.load(&Resolved::File("index.html".to_string())).await.unwrap(),
        b"<h1>home</h1>".to_vec()
    );
    assert!(files.load(&Resolved::File("docs".to_string())).await.is_err());
}

#[tokio::test]
async fn test_missing_error_pages() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("error404.html"), "missing").unwrap();
    let files = StaticFiles::new(dir.path(), "error400.html", "error404.html");

    assert_eq!(files.missing_error_pages().await, vec!["error400.html"]);
}
