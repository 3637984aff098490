use crate::data::live_channel::{LiveChannelStore, CONFIG_FILE};
use crate::error::store::StoreError;
use crate::model::live_channel::{LiveChannelDocument, LiveChannelRecord};
use test_utils::context::TestContext;

mod get;
mod upsert;
