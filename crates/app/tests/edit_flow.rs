//! End-to-end editor flow over the public API, backed by the in-memory store.

use std::sync::Arc;

use chrono::Utc;

use fultimator_app::{
    AppSettings, EditSession, IdentityPort, InMemoryNpcStore, NpcStore, SessionStatus, SystemClock,
};
use fultimator_domain::{Attack, AttributeName, Element, Npc, UserId};

struct StaticIdentity(Option<UserId>);

impl IdentityPort for StaticIdentity {
    fn current_user(&self) -> Option<UserId> {
        self.0
    }
}

fn session_for(
    store: &Arc<InMemoryNpcStore>,
    user: UserId,
    npc: &Npc,
) -> EditSession {
    EditSession::new(
        store.clone(),
        Arc::new(StaticIdentity(Some(user))),
        Arc::new(SystemClock::new()),
        AppSettings::default(),
        npc.id,
    )
}

#[tokio::test]
async fn edit_publish_watch_duplicate_flow() {
    let owner = UserId::new();
    let npc = Npc::new(owner, "Goblin Chief")
        .with_description("A bossy goblin.")
        .with_traits("cowardly, loud")
        .with_created_by("gm")
        .with_language("en")
        .with_attack(Attack::new(
            "Club",
            AttributeName::Might,
            AttributeName::Might,
            Element::Physical,
        ));

    let store = Arc::new(InMemoryNpcStore::new());
    store.seed(npc.clone());

    // Open and load.
    let mut session = session_for(&store, owner, &npc);
    session.load().await.expect("load");
    assert_eq!(session.status(), SessionStatus::Clean);

    // Edit, then save; the store holds the full draft afterwards.
    session.set_description("A bossy goblin with a crown.".to_string());
    assert_eq!(session.status(), SessionStatus::Dirty);
    session.save().await.expect("save");

    // Publish stamps the record.
    let before = Utc::now();
    session.publish().await.expect("publish");
    let published = store.get(npc.id).await.expect("get").expect("exists");
    assert!(published.published);
    assert_eq!(published.search_string, vec!["goblin", "chief"]);
    let published_at = published.published_at.expect("publish timestamp");
    assert!(published_at >= before);

    // A remote editor's write reaches this session through watch and wins
    // over local unsaved edits.
    let mut watcher = store.watch(npc.id);
    session.set_name("Unsaved local rename".to_string());

    let mut remote = published.clone();
    remote.traits = "cowardly, loud, crowned".to_string();
    store.overwrite(npc.id, &remote).await.expect("overwrite");

    let incoming = watcher.recv().await.expect("notification");
    session.apply_remote(incoming);
    let draft = session.draft().expect("draft");
    assert_eq!(draft.name, "Goblin Chief");
    assert_eq!(draft.traits, "cowardly, loud, crowned");
    assert_eq!(session.status(), SessionStatus::Clean);

    // A different signed-in user duplicates the sheet into their own copy.
    let visitor = UserId::new();
    let mut visitor_session = session_for(&store, visitor, &npc);
    visitor_session.load().await.expect("load");
    let copy_id = visitor_session.duplicate().await.expect("duplicate");

    let copy = store.get(copy_id).await.expect("get").expect("exists");
    assert_ne!(copy_id, npc.id);
    assert_eq!(copy.uid, visitor);
    assert!(!copy.published);
    assert_eq!(copy.name, "Goblin Chief");

    // Closing loses nothing that was saved.
    session.close();
    let final_doc = store.get(npc.id).await.expect("get").expect("exists");
    assert_eq!(final_doc.traits, "cowardly, loud, crowned");
}
