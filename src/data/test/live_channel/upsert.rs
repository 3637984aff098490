use super::*;

/// Tests upserting into a store whose file does not exist yet.
///
/// Verifies that the data directory and document are created lazily and that
/// the resulting document contains exactly the new record.
///
/// Expected: Ok with a single record for the guild
#[tokio::test]
async fn creates_document_on_first_upsert() -> Result<(), StoreError> {
    let test = TestContext::new().unwrap();
    let store = LiveChannelStore::new(test.data_dir());

    store.upsert(111, 222).await?;

    let raw = std::fs::read_to_string(test.data_dir().join(CONFIG_FILE)).unwrap();
    let document: LiveChannelDocument = serde_json::from_str(&raw).unwrap();

    assert_eq!(document.len(), 1);
    assert_eq!(document.get("111"), Some(&LiveChannelRecord::new("222")));

    Ok(())
}

/// Tests upserting a guild that already has a record.
///
/// Verifies that the prior record is replaced in full: the channel id is
/// updated and a previously stored `messageIds` list is reset to null.
///
/// Expected: Ok with only the latest channel id and no message ids
#[tokio::test]
async fn overwrites_existing_record() -> Result<(), StoreError> {
    let test = TestContext::new().unwrap();
    std::fs::create_dir_all(test.data_dir()).unwrap();
    std::fs::write(
        test.data_dir().join(CONFIG_FILE),
        r#"{"111": {"channelId": "222", "messageIds": ["900", "901"]}}"#,
    )
    .unwrap();

    let store = LiveChannelStore::new(test.data_dir());
    store.upsert(111, 333).await?;

    let record = store.get(111).await?.unwrap();
    assert_eq!(record.channel_id, "333");
    assert_eq!(record.message_ids, None);

    Ok(())
}

/// Tests upserting records for two different guilds.
///
/// Verifies that configuring one guild does not disturb another guild's record
/// in the shared document.
///
/// Expected: Ok with both records present
#[tokio::test]
async fn preserves_other_guilds() -> Result<(), StoreError> {
    let test = TestContext::new().unwrap();
    let store = LiveChannelStore::new(test.data_dir());

    store.upsert(111, 222).await?;
    store.upsert(444, 555).await?;

    assert_eq!(store.get(111).await?.unwrap().channel_id, "222");
    assert_eq!(store.get(444).await?.unwrap().channel_id, "555");

    Ok(())
}

/// Tests upserting over a malformed configuration file.
///
/// Verifies that a parse failure aborts the upsert before anything is written,
/// leaving the unreadable file exactly as it was.
///
/// Expected: Err(StoreError::Parse) and an unchanged file
#[tokio::test]
async fn rejects_malformed_document_without_truncating() {
    let test = TestContext::new().unwrap();
    std::fs::create_dir_all(test.data_dir()).unwrap();

    let path = test.data_dir().join(CONFIG_FILE);
    std::fs::write(&path, "{not valid json").unwrap();

    let store = LiveChannelStore::new(test.data_dir());
    let result = store.upsert(111, 222).await;

    assert!(matches!(result, Err(StoreError::Parse { .. })));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{not valid json");
}

/// Tests the on-disk shape of a freshly upserted record.
///
/// Verifies that the persisted JSON keys follow the camelCase wire format and
/// that `messageIds` is written as an explicit null rather than omitted.
///
/// Expected: Ok with `channelId` and `messageIds: null` in the file
#[tokio::test]
async fn writes_camel_case_record_with_null_message_ids() -> Result<(), StoreError> {
    let test = TestContext::new().unwrap();
    let store = LiveChannelStore::new(test.data_dir());

    store.upsert(111, 222).await?;

    let raw = std::fs::read_to_string(test.data_dir().join(CONFIG_FILE)).unwrap();
    assert!(raw.contains("\"channelId\": \"222\""));
    assert!(raw.contains("\"messageIds\": null"));

    Ok(())
}

/// Tests concurrent upserts for distinct guilds.
///
/// The whole read-modify-write cycle is serialized behind the store's lock,
/// so no update may be lost when several command invocations run at once.
///
/// Expected: Ok with every guild's record in the final document
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_upserts_lose_no_updates() {
    let test = TestContext::new().unwrap();
    let store = std::sync::Arc::new(LiveChannelStore::new(test.data_dir()));

    let tasks: Vec<_> = (1..=16u64)
        .map(|guild| {
            let store = std::sync::Arc::clone(&store);
            tokio::spawn(async move { store.upsert(guild, guild * 10).await })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let raw = std::fs::read_to_string(test.data_dir().join(CONFIG_FILE)).unwrap();
    let document: LiveChannelDocument = serde_json::from_str(&raw).unwrap();

    assert_eq!(document.len(), 16);
    for guild in 1..=16u64 {
        let record = document.get(&guild.to_string()).unwrap();
        assert_eq!(record.channel_id, (guild * 10).to_string());
    }
}
