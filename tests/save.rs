use std::cell::RefCell;
use std::collections::BTreeMap;

use futures::executor::block_on;

use frontpage_builder::catalog::{Article, Catalog};
use frontpage_builder::save::{save_layout, save_notice, SaveRequest, SaveResponse, SaveTransport, MISSING_GROUP_NOTICE};
use frontpage_builder::store::SlotStore;
use frontpage_builder::{Error, Result};

/// Records every request and answers with a canned response.
struct Recorder {
    sent: RefCell<Vec<SaveRequest>>,
    answer: fn() -> Result<SaveResponse>,
}

impl Recorder {
    fn answering(answer: fn() -> Result<SaveResponse>) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            answer,
        }
    }
}

impl SaveTransport for Recorder {
    async fn post(&self, request: &SaveRequest) -> Result<SaveResponse> {
        self.sent.borrow_mut().push(request.clone());
        (self.answer)()
    }
}

fn saved_as_floria() -> Result<SaveResponse> {
    Ok(SaveResponse {
        success: true,
        filename: Some("floria-frontpage.json".into()),
    })
}

fn layout() -> BTreeMap<String, Option<frontpage_builder::catalog::ArticleId>> {
    let catalog = Catalog::new(vec![Article::new("1", "A"), Article::new("2", "B")], vec![]);
    let mut store = SlotStore::new();
    store.assign(&catalog, "huvudnyhet", "1");
    store.assign(&catalog, "citat", "2");
    store.get_all()
}

#[test]
fn blank_group_name_sends_nothing() {
    let transport = Recorder::answering(saved_as_floria);
    for name in ["", "   "] {
        let result = block_on(save_layout(&transport, name, layout(), "2026-01-01T00:00:00Z".into()));
        assert!(matches!(result, Err(Error::MissingGroupName)));
        assert_eq!(save_notice(&result), MISSING_GROUP_NOTICE);
    }
    assert!(transport.sent.borrow().is_empty());
}

#[test]
fn successful_save_reports_name_without_extension() {
    let transport = Recorder::answering(saved_as_floria);
    let result = block_on(save_layout(&transport, " floria ", layout(), "2026-01-01T00:00:00Z".into()));

    assert_eq!(result.as_deref().ok(), Some("floria-frontpage"));
    let notice = save_notice(&result);
    assert!(notice.contains("floria-frontpage"));
    assert!(!notice.contains(".json"));

    let sent = transport.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].group_name, "floria");
    assert_eq!(sent[0].slots.len(), 9);
    assert_eq!(sent[0].slots["citat"].as_ref().map(|id| id.as_str()), Some("2"));
    assert_eq!(sent[0].slots["puff1"], None);
}

#[test]
fn server_refusal_is_reported_as_failure() {
    let transport = Recorder::answering(|| Ok(SaveResponse::default()));
    let result = block_on(save_layout(&transport, "7B", layout(), String::new()));

    assert!(matches!(result, Err(Error::Rejected)));
    assert_eq!(save_notice(&result), "Något gick fel vid sparande");
}

#[test]
fn transport_failure_is_reported_as_failure() {
    let transport = Recorder::answering(|| Err(Error::Browser("offline".into())));
    let result = block_on(save_layout(&transport, "7B", layout(), String::new()));

    assert!(matches!(result, Err(Error::Browser(_))));
    assert_eq!(save_notice(&result), "Kunde inte spara");
    assert_eq!(transport.sent.borrow().len(), 1);
}
