//! Store Integration Tests
//!
//! Runs the closet flows against the in-memory store.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::domain::{DeleteMode, Facet, Item, ItemId, Photo, SortMode};
    use crate::session::ClosetSession;
    use crate::store::{InMemoryStore, RemoteStore, StoreOp};

    fn seeded(name: &str, created: &str) -> Item {
        Item {
            id: ItemId::new(name.to_lowercase().replace(' ', "-")),
            name: name.to_string(),
            category: "Üst".to_string(),
            color: "Mavi".to_string(),
            size: "M".to_string(),
            image_path: None,
            created_at: created.to_string(),
        }
    }

    fn photo() -> Photo {
        Photo::new("gömlek.JPG", "image/jpeg", vec![0xff, 0xd8, 0xff])
    }

    async fn setup(mode: DeleteMode) -> (Arc<InMemoryStore>, ClosetSession<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::with_items(vec![
            seeded("Mavi gömlek", "2024-01-01T00:00:00Z"),
            seeded("Kırmızı pantolon", "2024-01-02T00:00:00Z"),
        ]));
        let mut session = ClosetSession::new(store.clone(), mode);
        session.refresh().await;
        (store, session)
    }

    async fn add(session: &mut ClosetSession<InMemoryStore>, name: &str, photo: Option<Photo>) -> bool {
        let form = &mut session.closet_mut().form;
        form.toggle_open();
        form.name = name.to_string();
        session.submit(photo).await
    }

    #[tokio::test]
    async fn test_refresh_lists_newest_first() {
        let (_, session) = setup(DeleteMode::Confirmed).await;
        let names: Vec<&str> = session.closet().items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Kırmızı pantolon", "Mavi gömlek"]);
        assert!(session.closet().error().is_none());
    }

    #[tokio::test]
    async fn test_failed_refresh_empties_list() {
        let (store, mut session) = setup(DeleteMode::Confirmed).await;
        store.fail_on(StoreOp::List).await;
        session.refresh().await;
        assert!(session.closet().is_empty());
        assert!(session.closet().error().is_some());
    }

    #[tokio::test]
    async fn test_add_with_photo() {
        let (store, mut session) = setup(DeleteMode::Confirmed).await;
        assert!(add(&mut session, "Keten ceket", Some(photo())).await);

        let created = &session.closet().items()[0];
        assert_eq!(created.name, "Keten ceket");
        let path = created.image_path.clone().expect("photo path");
        assert!(path.ends_with(".jpg"));
        assert!(store.has_asset(&path).await);
        assert_eq!(session.public_url(created), Some(format!("memory://images/{}", path)));

        // newest sort puts the new item first
        let visible = session.closet().visible();
        assert_eq!(visible[0].name, "Keten ceket");
    }

    #[tokio::test]
    async fn test_blank_name_never_reaches_store() {
        let (store, mut session) = setup(DeleteMode::Confirmed).await;
        assert!(!add(&mut session, "   ", Some(photo())).await);
        assert_eq!(store.row_count().await, 2);
        assert_eq!(store.asset_count().await, 0);
        assert!(session.closet().error().unwrap().contains("blank"));
    }

    #[tokio::test]
    async fn test_failed_insert_leaves_orphaned_asset() {
        let (store, mut session) = setup(DeleteMode::Confirmed).await;
        store.fail_on(StoreOp::Insert).await;
        assert!(!add(&mut session, "Yelek", Some(photo())).await);
        assert_eq!(store.row_count().await, 2);
        assert_eq!(store.asset_count().await, 1);
        assert_eq!(session.closet().len(), 2);
        assert!(session.closet().form.open);
    }

    #[tokio::test]
    async fn test_failed_upload_still_saves_item_without_photo() {
        let (store, mut session) = setup(DeleteMode::Confirmed).await;
        store.fail_on(StoreOp::UploadAsset).await;
        assert!(add(&mut session, "Yelek", Some(photo())).await);

        assert_eq!(store.row_count().await, 3);
        assert_eq!(store.asset_count().await, 0);
        let created = &session.closet().items()[0];
        assert_eq!(created.name, "Yelek");
        assert!(created.image_path.is_none());
        assert!(!session.closet().form.open);
        assert!(session.closet().error().unwrap().contains("503"));
    }

    #[tokio::test]
    async fn test_update_replaces_photo_and_removes_old_asset() {
        let (store, mut session) = setup(DeleteMode::Confirmed).await;
        assert!(add(&mut session, "Hırka", Some(photo())).await);
        let original = session.closet().items()[0].clone();
        let old_path = original.image_path.clone().unwrap();

        session.closet_mut().form.start_edit(&original);
        session.closet_mut().form.color = "Gri".to_string();
        assert!(session.submit(Some(photo())).await);

        let updated = session.closet().find(&original.id).unwrap().clone();
        assert_eq!(updated.color, "Gri");
        let new_path = updated.image_path.clone().unwrap();
        assert_ne!(new_path, old_path);
        assert!(!store.has_asset(&old_path).await);
        assert!(store.has_asset(&new_path).await);

        let stored = store.list().await.unwrap();
        let row = stored.iter().find(|i| i.id == original.id).unwrap();
        assert_eq!(row, &updated);
    }

    #[tokio::test]
    async fn test_update_can_remove_photo() {
        let (store, mut session) = setup(DeleteMode::Confirmed).await;
        assert!(add(&mut session, "Hırka", Some(photo())).await);
        let original = session.closet().items()[0].clone();

        session.closet_mut().form.start_edit(&original);
        session.closet_mut().form.remove_photo = true;
        assert!(session.submit(None).await);
        assert!(session.closet().find(&original.id).unwrap().image_path.is_none());
        assert_eq!(store.asset_count().await, 0);
    }

    #[tokio::test]
    async fn test_failed_update_leaves_state() {
        let (store, mut session) = setup(DeleteMode::Confirmed).await;
        let target = session.closet().items()[0].clone();
        store.fail_on(StoreOp::Update).await;

        session.closet_mut().form.start_edit(&target);
        session.closet_mut().form.name = "Yeni isim".to_string();
        assert!(!session.submit(None).await);
        assert_eq!(session.closet().find(&target.id).unwrap(), &target);
        assert!(session.closet().error().is_some());
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_everywhere() {
        let (store, mut session) = setup(DeleteMode::Confirmed).await;
        assert!(add(&mut session, "Atkı", Some(photo())).await);
        let target = session.closet().items()[0].clone();

        assert!(session.delete(&target.id).await);
        assert!(session.closet().visible().iter().all(|i| i.id != target.id));
        assert_eq!(store.asset_count().await, 0);

        session.refresh().await;
        assert!(session.closet().find(&target.id).is_none());
    }

    #[tokio::test]
    async fn test_confirmed_delete_failure_keeps_item() {
        let (store, mut session) = setup(DeleteMode::Confirmed).await;
        let target = session.closet().items()[0].id.clone();
        store.fail_on(StoreOp::Delete).await;

        assert!(!session.delete(&target).await);
        assert!(session.closet().find(&target).is_some());
        assert!(session.closet().error().is_some());
    }

    #[tokio::test]
    async fn test_optimistic_delete_failure_still_removes_locally() {
        let (store, mut session) = setup(DeleteMode::Optimistic).await;
        let target = session.closet().items()[0].id.clone();
        store.fail_on(StoreOp::Delete).await;

        assert!(!session.delete(&target).await);
        assert!(session.closet().find(&target).is_none());
        assert_eq!(store.row_count().await, 2);
    }

    #[tokio::test]
    async fn test_asset_removal_failure_does_not_fail_delete() {
        let (store, mut session) = setup(DeleteMode::Confirmed).await;
        assert!(add(&mut session, "Atkı", Some(photo())).await);
        let target = session.closet().items()[0].id.clone();
        store.fail_on(StoreOp::DeleteAsset).await;

        assert!(session.delete(&target).await);
        assert!(session.closet().find(&target).is_none());
        assert_eq!(store.asset_count().await, 1);
    }

    #[tokio::test]
    async fn test_second_delete_is_noop() {
        let (store, _) = setup(DeleteMode::Confirmed).await;
        let id = ItemId::new("mavi-gömlek");
        store.delete(&id).await.unwrap();
        store.delete(&id).await.unwrap();
        assert_eq!(store.row_count().await, 1);
    }

    #[tokio::test]
    async fn test_filters_over_session_state() {
        let (_, mut session) = setup(DeleteMode::Confirmed).await;
        let closet = session.closet_mut();
        closet.filter.set_sort(SortMode::NameAsc);
        closet.filter.set_query("mavi");
        assert_eq!(closet.visible().len(), 1);

        closet.filter.clear();
        closet.filter.toggle(Facet::Category, "Dış");
        assert!(closet.visible().is_empty());
    }
}
