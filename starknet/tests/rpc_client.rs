//! JSON-RPC level tests for contract reads against a mock node.

use quest_starknet::{
    get_selector_from_name, ContractReader, QuestNftClient, RewardContract, StarknetError,
    StarknetRpcClient, TaskStatusQuery,
};
use quest_types::{Address, Felt, QuestId};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn starknet_call_request_shape() {
    let server = MockServer::start().await;
    let selector = get_selector_from_name("get_tasks_status").to_hex();
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "jsonrpc": "2.0",
            "method": "starknet_call",
            "params": {
                "request": {
                    "contract_address": "0x1",
                    "entry_point_selector": selector,
                    "calldata": ["0x1", "0x7", "0x1", "0xabc"]
                },
                "block_id": "latest"
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "jsonrpc": "2.0", "id": 1, "result": ["0x1", "0x0"] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let rpc = StarknetRpcClient::new(server.uri()).unwrap();
    let nft = QuestNftClient::new(&rpc);
    let user = Address::parse("0xabc").unwrap();
    let statuses = nft
        .get_tasks_status(
            &Address::parse("0x1").unwrap(),
            &[TaskStatusQuery {
                quest_id: QuestId::new(7),
                task_id: 1,
                user,
            }],
        )
        .await
        .unwrap();
    assert_eq!(statuses, vec![0]);
}

#[tokio::test]
async fn rpc_error_object_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": 20, "message": "Contract not found" }
        })))
        .mount(&server)
        .await;

    let rpc = StarknetRpcClient::new(server.uri()).unwrap();
    let err = rpc
        .call(&Address::parse("0x1").unwrap(), "get_tasks_status", &[Felt::ZERO])
        .await
        .unwrap_err();
    assert!(matches!(err, StarknetError::Rpc { code: 20, .. }));
}

#[tokio::test]
async fn http_failure_is_request_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let rpc = StarknetRpcClient::new(server.uri()).unwrap();
    let err = rpc
        .call(&Address::parse("0x1").unwrap(), "get_tasks_status", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, StarknetError::RequestFailed(_)));
}
