//! Full page lifecycle against a live todo server.
//!
//! Starts the server on a random port, then drives `TodoApp` over real HTTP
//! using ureq. Validates that request building, response parsing and local
//! list reconciliation agree with what the server actually stores.

use todo_core::{HttpMethod, HttpRequest, HttpResponse, LoadState, TodoApp, TodoClient};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's status-code-as-error behavior so 4xx/5xx responses come
/// back as data and the core does the status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.url)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.url)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.url).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();
    HttpResponse::new(status, body)
}

fn start_server(hide_completed: bool) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, todo_server::AppState::in_memory(hide_completed)).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn mount(base_url: &str) -> TodoApp {
    let mut app = TodoApp::new(TodoClient::new(base_url));
    let req = app.begin_load().expect("first load");
    app.finish_load(execute(req)).unwrap();
    assert_eq!(app.load_state(), LoadState::Loaded);
    app
}

fn add(app: &mut TodoApp, text: &str) -> String {
    app.set_draft(text);
    let req = app.begin_add().unwrap().expect("non-blank draft");
    app.finish_add(execute(req)).unwrap().id.clone()
}

#[test]
fn page_lifecycle() {
    let base_url = start_server(false);
    let client = TodoClient::new(&base_url);

    // Step 1: mount: empty list.
    let mut app = mount(&base_url);
    assert!(app.todos().is_empty());

    // Step 2: add two items.
    let milk = add(&mut app, "  buy milk ");
    let dog = add(&mut app, "walk dog");
    assert_ne!(milk, dog);
    assert_eq!(app.todos()[0].item, "buy milk");
    assert!(!app.todos()[0].completed);

    // Step 3: the server agrees.
    let fetched = client
        .parse_get_todo(execute(client.build_get_todo(&milk)))
        .unwrap();
    assert_eq!(fetched.attributes.item, "buy milk");
    assert_eq!(fetched.attributes.completed, Some(false));

    // Step 4: complete, then edit the text; completion survives the edit.
    let req = app.begin_complete(&milk, "buy milk").unwrap();
    app.finish_complete(&milk, execute(req)).unwrap();
    let req = app.begin_edit(&milk, "buy oat milk").unwrap();
    app.finish_edit(&milk, execute(req)).unwrap();
    assert_eq!(app.todos()[0].item, "buy oat milk");
    assert!(app.todos()[0].completed);
    assert!(app.rows()[0].read_only);

    // Step 5: a fresh mount sees the same list.
    let remount = mount(&base_url);
    assert_eq!(remount.todos(), app.todos());

    // Step 6: delete, then delete again: NotFound, list unchanged.
    let req = app.begin_delete(&dog);
    app.finish_delete(&dog, execute(req)).unwrap();
    assert_eq!(app.todos().len(), 1);
    let req = app.begin_delete(&dog);
    let err = app.finish_delete(&dog, execute(req)).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(app.todos().len(), 1);

    // Step 7: get after delete: NotFound.
    let err = client
        .parse_get_todo(execute(client.build_get_todo(&dog)))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn hidden_completed_items_drop_out_of_the_list() {
    let base_url = start_server(true);

    let mut app = mount(&base_url);
    let milk = add(&mut app, "buy milk");
    add(&mut app, "walk dog");

    let req = app.begin_complete(&milk, "buy milk").unwrap();
    app.finish_complete(&milk, execute(req)).unwrap();
    // The local list keeps the completed item until the next mount.
    assert_eq!(app.todos().len(), 2);

    let remount = mount(&base_url);
    assert_eq!(remount.todos().len(), 1);
    assert_eq!(remount.todos()[0].item, "walk dog");
}
