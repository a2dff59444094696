use search_core::{DocId, DocumentStatus, RequestQueue, SearchServer};

fn server() -> SearchServer {
    let mut server = SearchServer::from_stop_words_text("and in at").unwrap();
    server.add_document(1, "curly cat curly tail", DocumentStatus::Actual, &[7, 2, 7]).unwrap();
    server.add_document(2, "curly dog and fancy collar", DocumentStatus::Actual, &[1, 2, 3]).unwrap();
    server.add_document(3, "big cat fancy collar ", DocumentStatus::Actual, &[1, 2, 8]).unwrap();
    server.add_document(4, "big dog sparrow Eugene", DocumentStatus::Actual, &[1, 3, 2]).unwrap();
    server.add_document(5, "big dog sparrow Vasiliy", DocumentStatus::Actual, &[1, 1, 1]).unwrap();
    server
}

#[test]
fn counts_empty_requests_over_the_last_day() {
    let server = server();
    let mut queue = RequestQueue::new(&server);
    for _ in 0..1439 {
        queue.add_find_request("empty request").unwrap();
    }
    queue.add_find_request("curly dog").unwrap();
    queue.add_find_request_by_status("big collar", DocumentStatus::Actual).unwrap();
    queue.add_find_request_with("sparrow", |_: DocId, status: DocumentStatus, _: i32| status == DocumentStatus::Actual).unwrap();
    assert_eq!(queue.get_no_result_requests(), 1437);
}

#[test]
fn oldest_empty_request_is_evicted() {
    let server = server();
    let mut queue = RequestQueue::new(&server);
    assert!(queue.add_find_request("nothing").unwrap().is_empty());
    assert_eq!(queue.get_no_result_requests(), 1);
    for _ in 0..1440 {
        assert!(!queue.add_find_request("cat").unwrap().is_empty());
    }
    assert_eq!(queue.get_no_result_requests(), 0);
    assert_eq!(queue.len(), RequestQueue::DEFAULT_WINDOW as usize);
}

#[test]
fn returns_results_unchanged() {
    let server = server();
    let mut queue = RequestQueue::new(&server);
    let direct = server.find_top_documents("curly -tail").unwrap();
    let tracked = queue.add_find_request("curly -tail").unwrap();
    assert_eq!(direct, tracked);
}
