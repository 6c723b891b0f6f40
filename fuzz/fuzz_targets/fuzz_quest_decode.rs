#![no_main]

use libfuzzer_sys::fuzz_target;
use quest_types::{EligibleReward, QueryError, QuestDocument, UserTask};

// Backend payloads of any shape decode or fail cleanly.
fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<QuestDocument>(data);
    let _ = serde_json::from_slice::<Vec<UserTask>>(data);
    let _ = serde_json::from_slice::<Vec<EligibleReward>>(data);
    let _ = serde_json::from_slice::<QueryError>(data);
});
