//! Reconciliation passes wired against nullable backend and contracts.

use quest_nullables::{ApiRequest, Canned, NullQuestApi, NullRewardContract};
use quest_rewards::{ClaimGate, EligibilityReconciler, RewardError};
use quest_types::{Address, EligibleReward, Felt, QuestDocument, QuestId};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const ENDPOINT: &str = "https://api.example/quests/7/claimable";

fn quest(rewards_endpoint: &str) -> QuestDocument {
    QuestDocument {
        id: 7,
        name: "Discord quest".into(),
        desc: "Link your discord".into(),
        issuer: "Starknet ID".into(),
        category: "Social".into(),
        rewards_endpoint: rewards_endpoint.into(),
        logo: String::new(),
        rewards_img: String::new(),
        rewards_title: "1 NFT".into(),
        rewards_nfts: Vec::new(),
    }
}

fn contract(n: u64) -> Address {
    Address::new(Felt::from_u64(n))
}

fn reward(task_id: u64, nft_contract: u64, token_id: u64) -> EligibleReward {
    EligibleReward {
        task_id,
        nft_contract: contract(nft_contract),
        token_id: Felt::from_u64(token_id),
        sig: [Felt::from_u64(0x51), Felt::from_u64(0x52)],
    }
}

fn user() -> Address {
    Address::parse("0xABC").unwrap()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[tokio::test]
async fn two_contracts_one_claimed() {
    let api = NullQuestApi::new().with_rewards(vec![reward(1, 0x1, 10), reward(2, 0x2, 20)]);
    let contracts = NullRewardContract::new()
        .with_statuses(contract(0x1), vec![0])
        .with_statuses(contract(0x2), vec![1]);
    let reconciler = EligibilityReconciler::new(&api, &contracts);

    let pass = reconciler
        .reconcile(QuestId::new(7), &quest(ENDPOINT), Some(&user()))
        .await
        .unwrap();

    assert_eq!(pass.eligible.len(), 2);
    assert_eq!(pass.unclaimed, vec![reward(1, 0x1, 10)]);

    let mut gate = ClaimGate::new();
    gate.rebuild(QuestId::new(7), &pass.unclaimed);
    assert_eq!(gate.calls().len(), 1);
    assert!(gate.is_enabled());

    // Each contract was asked about its own rewards only.
    let calls = contracts.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, contract(0x1));
    assert_eq!(calls[0].1[0].task_id, 1);
    assert_eq!(calls[0].1[0].quest_id, QuestId::new(7));
    assert_eq!(calls[0].1[0].user, user());
    assert_eq!(calls[1].0, contract(0x2));
    assert_eq!(calls[1].1[0].task_id, 2);
}

#[tokio::test]
async fn endpoint_without_rewards_gives_empty_set() {
    let api = NullQuestApi::new().with_rewards(Vec::new());
    let contracts = NullRewardContract::new();
    let reconciler = EligibilityReconciler::new(&api, &contracts);

    let pass = reconciler
        .reconcile(QuestId::new(7), &quest(ENDPOINT), Some(&user()))
        .await
        .unwrap();

    assert!(pass.eligible.is_empty());
    assert!(pass.unclaimed.is_empty());
    assert!(contracts.calls().is_empty());

    let mut gate = ClaimGate::new();
    gate.rebuild(QuestId::new(7), &pass.unclaimed);
    assert!(!gate.is_enabled());
    assert!(gate.calls().is_empty());
}

#[tokio::test]
async fn no_address_never_fetches() {
    let api = NullQuestApi::new().with_rewards(vec![reward(1, 0x1, 10)]);
    let contracts = NullRewardContract::new();
    let reconciler = EligibilityReconciler::new(&api, &contracts);

    let pass = reconciler
        .reconcile(QuestId::new(7), &quest(ENDPOINT), None)
        .await
        .unwrap();

    assert!(pass.unclaimed.is_empty());
    assert_eq!(api.reward_request_count(), 0);
    assert!(contracts.calls().is_empty());
}

#[tokio::test]
async fn no_endpoint_never_fetches() {
    let api = NullQuestApi::new().with_rewards(vec![reward(1, 0x1, 10)]);
    let contracts = NullRewardContract::new();
    let reconciler = EligibilityReconciler::new(&api, &contracts);

    let pass = reconciler
        .reconcile(QuestId::new(7), &quest(""), Some(&user()))
        .await
        .unwrap();

    assert!(pass.unclaimed.is_empty());
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn fetch_uses_quest_endpoint_and_address() {
    let api = NullQuestApi::new().with_rewards(Vec::new());
    let contracts = NullRewardContract::new();
    let reconciler = EligibilityReconciler::new(&api, &contracts);

    reconciler
        .fetch_eligible(&quest(ENDPOINT), Some(&user()))
        .await
        .unwrap();

    assert_eq!(
        api.requests(),
        vec![ApiRequest::EligibleRewards {
            endpoint: ENDPOINT.into(),
            addr: user(),
        }]
    );
}

#[tokio::test]
async fn unclaimed_concatenates_in_group_order() {
    // Contract 0x2 is seen first, so its rewards come first.
    let api = NullQuestApi::new().with_rewards(vec![
        reward(1, 0x2, 10),
        reward(2, 0x1, 20),
        reward(3, 0x2, 30),
        reward(4, 0x1, 40),
    ]);
    let contracts = NullRewardContract::new()
        .with_statuses(contract(0x2), vec![0, 0])
        .with_statuses(contract(0x1), vec![1, 0]);
    let reconciler = EligibilityReconciler::new(&api, &contracts);

    let pass = reconciler
        .reconcile(QuestId::new(7), &quest(ENDPOINT), Some(&user()))
        .await
        .unwrap();

    let ids: Vec<u64> = pass.unclaimed.iter().map(|r| r.task_id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[tokio::test]
async fn contract_failure_fails_the_pass() {
    let api = NullQuestApi::new().with_rewards(vec![reward(1, 0x1, 10), reward(2, 0x2, 20)]);
    let contracts = NullRewardContract::new();
    contracts.fail(contract(0x2));
    let reconciler = EligibilityReconciler::new(&api, &contracts);

    let err = reconciler
        .reconcile(QuestId::new(7), &quest(ENDPOINT), Some(&user()))
        .await
        .unwrap_err();
    assert!(matches!(err, RewardError::Contract(_)));
    assert!(!err.is_malformed());
}

#[tokio::test]
async fn malformed_rewards_response_is_classified() {
    let api = NullQuestApi::new();
    api.set_rewards(Canned::Malformed);
    let contracts = NullRewardContract::new();
    let reconciler = EligibilityReconciler::new(&api, &contracts);

    let err = reconciler
        .reconcile(QuestId::new(7), &quest(ENDPOINT), Some(&user()))
        .await
        .unwrap_err();
    assert!(err.is_malformed());
}
