use tinyweb::http::resolver::Resolved;
use tinyweb::http::response::{Response, ResponseBuilder, StatusCode};
use tinyweb::http::writer::{serialize_head, serialize_response, ResponseWriter};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "File not found");
}

#[test]
fn test_status_from_resolution() {
    assert_eq!(StatusCode::from(&Resolved::BadRequest), StatusCode::BadRequest);
    assert_eq!(StatusCode::from(&Resolved::NotFound), StatusCode::NotFound);
    assert_eq!(
        StatusCode::from(&Resolved::File("a.txt".to_string())),
        StatusCode::Ok
    );
}

#[test]
fn test_response_builder_auto_content_length() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(StatusCode::Ok).body(body.clone()).build();

    assert_eq!(response.header("Content-Length"), Some("16"));
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.header("Content-Length"), Some("999"));
    assert_eq!(response.headers.len(), 1);
}

#[test]
fn test_response_builder_replaces_header_in_place() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("X-Custom", "value")
        .header("Content-Type", "text/html")
        .build();

    assert_eq!(response.headers[0], ("Content-Type".to_string(), "text/html".to_string()));
    assert_eq!(response.headers[1].0, "X-Custom");
    assert_eq!(response.headers[2].0, "Content-Length");
}

#[test]
fn test_for_resource_header_order() {
    let response = Response::for_resource(
        &Resolved::File("index.html".to_string()),
        "text/html",
        b"<p>hi</p>".to_vec(),
    );

    assert_eq!(response.status, StatusCode::Ok);
    let names: Vec<&str> = response.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, ["Content-Type", "Content-Length"]);
    assert_eq!(response.header("Content-Length"), Some("9"));
}

#[test]
fn test_serialize_get_response() {
    let response = Response::for_resource(
        &Resolved::File("index.html".to_string()),
        "text/html",
        b"<p>hi</p>".to_vec(),
    );

    let wire = serialize_response(&response, true);
    assert_eq!(
        wire,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 9\r\n\r\n<p>hi</p>".to_vec()
    );
}

#[test]
fn test_serialize_head_keeps_content_length() {
    let response = Response::for_resource(&Resolved::NotFound, "text/html", b"missing".to_vec());

    let wire = serialize_response(&response, false);
    assert_eq!(
        wire,
        b"HTTP/1.1 404 File not found\r\nContent-Type: text/html\r\nContent-Length: 7\r\n\r\n".to_vec()
    );
    assert_eq!(wire, serialize_head(&response));
}

#[test]
fn test_serialize_unknown_type_sends_empty_header() {
    let response = Response::for_resource(&Resolved::File("a.bin".to_string()), "", vec![1, 2]);

    let wire = serialize_response(&response, true);
    assert!(wire.starts_with(b"HTTP/1.1 200 OK\r\nContent-Type: \r\nContent-Length: 2\r\n\r\n"));
    assert!(wire.ends_with(&[1, 2]));
}

#[tokio::test]
async fn test_writer_writes_everything() {
    let response = Response::for_resource(&Resolved::BadRequest, "text/html", b"bad".to_vec());
    let mut writer = ResponseWriter::new(&response, true);

    let mut out: Vec<u8> = Vec::new();
    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(
        out,
        b"HTTP/1.1 400 Bad Request\r\nContent-Type: text/html\r\nContent-Length: 3\r\n\r\nbad".to_vec()
    );
}
