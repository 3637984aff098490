use super::*;

/// Tests reading a guild from a store with no file on disk.
///
/// Verifies that a missing file behaves as an empty document rather than an
/// error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_file() -> Result<(), StoreError> {
    let test = TestContext::new().unwrap();
    let store = LiveChannelStore::new(test.data_dir());

    assert_eq!(store.get(111).await?, None);

    Ok(())
}

/// Tests reading back a previously stored guild record.
///
/// Expected: Ok(Some(LiveChannelRecord)) with the stored channel id
#[tokio::test]
async fn returns_stored_record() -> Result<(), StoreError> {
    let test = TestContext::new().unwrap();
    let store = LiveChannelStore::new(test.data_dir());

    store.upsert(111, 222).await?;

    assert_eq!(store.get(111).await?, Some(LiveChannelRecord::new("222")));
    assert_eq!(store.get(999).await?, None);

    Ok(())
}

/// Tests reading from a malformed configuration file.
///
/// Expected: Err(StoreError::Parse)
#[tokio::test]
async fn fails_on_malformed_document() {
    let test = TestContext::new().unwrap();
    std::fs::create_dir_all(test.data_dir()).unwrap();
    std::fs::write(test.data_dir().join(CONFIG_FILE), "[]").unwrap();

    let store = LiveChannelStore::new(test.data_dir());

    assert!(matches!(
        store.get(111).await,
        Err(StoreError::Parse { .. })
    ));
}

/// Tests reading while another task repeatedly rewrites the document.
///
/// Saves truncate the file in place, so a read that did not share the store's
/// lock could observe an empty or partially written document and fail to
/// parse. Every read here must return the complete record.
///
/// Expected: Ok(Some) with the stored channel id on every read
#[tokio::test(flavor = "multi_thread")]
async fn reads_complete_documents_during_concurrent_upserts() {
    let test = TestContext::new().unwrap();
    let store = std::sync::Arc::new(LiveChannelStore::new(test.data_dir()));

    store.upsert(2, 9000).await.unwrap();

    let writer = {
        let store = std::sync::Arc::clone(&store);
        tokio::spawn(async move {
            for i in 0..200u64 {
                store.upsert(1, i).await.unwrap();
            }
        })
    };

    for _ in 0..200 {
        let record = store.get(2).await.unwrap();
        assert_eq!(record.unwrap().channel_id, "9000");
    }

    writer.await.unwrap();
}
