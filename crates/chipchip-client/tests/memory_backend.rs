use std::sync::Arc;

use chipchip_client::{ChirpApi, Error, MemoryApi};
use chipchip_types::ListParams;

#[test]
fn test_memory_backend_behind_trait_object() -> anyhow::Result<()> {
    let api: Arc<dyn ChirpApi> = Arc::new(MemoryApi::seeded());
    assert_eq!(api.id(), "memory");

    let before = api.list_posts(ListParams::default())?;
    let created = api.create_post("Hello world")?;
    let after = api.list_posts(ListParams::default())?;

    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.data[0].id, created.id);
    assert_eq!(api.get_post(created.id)?.content, "Hello world");
    Ok(())
}

#[test]
fn test_created_chirp_carries_current_user() -> anyhow::Result<()> {
    let api = MemoryApi::seeded();
    let me = api.current_user()?.expect("seeded backend is signed in");
    let created = api.create_post("hi")?;

    assert_eq!(created.author_id, me.id);
    assert_eq!(created.author_name(), "Demo User");
    assert_eq!(created.likes_count, 0);
    Ok(())
}

#[test]
fn test_missing_chirp_is_not_found() {
    let api = MemoryApi::seeded();
    let err = api.get_post(uuid::Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(!err.is_retryable());
}
