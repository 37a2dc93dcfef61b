//! End-to-end library scenarios against the in-memory backend.

use std::time::Duration;

use postbox::gateway::memory::InMemoryBackend;
use postbox::model::{Post, PostDraft};
use postbox::session::{EditState, Session, SessionEvent};

fn seeded_backend() -> InMemoryBackend {
    InMemoryBackend::with_posts(vec![Post::new(1, "A".into(), "x".into())])
}

#[tokio::test]
async fn create_then_edit_scenario() {
    let (mut session, _events) = Session::new(seeded_backend(), Duration::from_millis(500));
    session.refresh().await.unwrap();

    // Create: the backend echoes id 101, the store assigns 2.
    let created = session.create(PostDraft::new("B", "y")).await.unwrap();
    assert_eq!(created.post, Post::new(2, "B".into(), "y".into()));

    let visible = session.visible_posts().await;
    assert_eq!(visible[0].id, 2);
    assert_eq!(visible[1].id, 1);

    // Edit the remote post through the form flow.
    session.begin_edit(1).await.unwrap();
    assert_eq!(session.edit_state(), EditState::Editing(1));

    let edited = session.submit(PostDraft::new("A2", "x2")).await.unwrap();
    assert_eq!(edited.post, Post::new(1, "A2".into(), "x2".into()));
    assert_eq!(session.edit_state(), EditState::Idle);

    let visible = session.visible_posts().await;
    assert_eq!(visible[0].title, "B");
    assert_eq!(visible[1].title, "A2");
    assert_eq!(visible[1].body, "x2");
}

#[tokio::test]
async fn viewing_an_edited_remote_post_needs_no_network() {
    let (mut session, _events) = Session::new(seeded_backend(), Duration::from_millis(500));
    session.refresh().await.unwrap();

    session.apply_edit(1, PostDraft::new("A2", "x2")).await.unwrap();

    // The cached copy carries the edit.
    assert_eq!(session.post(1).await.unwrap().title, "A2");
}

#[tokio::test(start_paused = true)]
async fn debounced_search_merges_local_and_remote_matches() {
    let backend = InMemoryBackend::with_posts(vec![
        Post::new(1, "needle on the server".into(), "x".into()),
        Post::new(2, "unrelated".into(), "y".into()),
    ]);
    let (mut session, mut events) = Session::new(backend, Duration::from_millis(500));
    session.refresh().await.unwrap();
    session
        .create(PostDraft::new("local Needle", "z"))
        .await
        .unwrap();

    session.search_debounced("needle".into());

    match events.recv().await.unwrap() {
        SessionEvent::SearchCompleted { query, posts } => {
            assert_eq!(query, "needle");
            assert_eq!(posts.len(), 2);
            assert_eq!(posts[0].title, "local Needle");
            assert_eq!(posts[1].id, 1);
        }
        other => panic!("unexpected event: {:?}", other),
    }
}
