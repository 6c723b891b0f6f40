//! Social verification status and the badge shown next to an identity.

use quest_starknet::IdentityRegistry;
use quest_types::Felt;
use quest_utils::minify_domain;

/// Verifier field under which Discord account ids are stored.
pub const DISCORD: &str = "discord";

/// Looks up the external account linked to an identity token.
pub struct VerifierStatusClient<R> {
    registry: R,
}

impl<R: IdentityRegistry> VerifierStatusClient<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Linked account id (decimal) for `platform`, or `None` when unset.
    ///
    /// A failed read is indistinguishable from an unset one.
    pub async fn linked_account(&self, token_id: &Felt, platform: &str) -> Option<String> {
        match self.registry.get_verifier_data(token_id, platform).await {
            Ok(data) if !data.is_zero() => Some(data.to_decimal()),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(%token_id, platform, error = %e, "verifier data unavailable");
                None
            }
        }
    }
}

/// What clicking the badge does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BadgeAction {
    /// Persist the token and navigate to the identity app.
    StartVerification { link: String },
    /// Open the linked account's profile.
    OpenProfile { url: String },
}

/// Discord badge next to a Starknet ID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialBadge {
    pub tooltip: String,
    /// Shows the verified check mark.
    pub verified: bool,
    pub action: BadgeAction,
}

impl SocialBadge {
    /// Badge for the Discord account linked to an identity.
    ///
    /// Owners always get a badge (to verify or re-verify); visitors only see
    /// one when an account is linked.
    pub fn discord(
        is_owner: bool,
        discord_id: Option<&str>,
        domain: &str,
        app_link: &str,
    ) -> Option<Self> {
        let link = format!("{}/identities", app_link.trim_end_matches('/'));
        match (is_owner, discord_id) {
            (true, Some(_)) => Some(Self {
                tooltip: "Change your discord on starknet ID".to_string(),
                verified: true,
                action: BadgeAction::StartVerification { link },
            }),
            (true, None) => Some(Self {
                tooltip: "Start Discord verification".to_string(),
                verified: false,
                action: BadgeAction::StartVerification { link },
            }),
            (false, Some(id)) => Some(Self {
                tooltip: format!("Check {} discord", minify_domain(domain)),
                verified: false,
                action: BadgeAction::OpenProfile {
                    url: format!("https://discord.com/channels/@me/{id}"),
                },
            }),
            (false, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_nullables::NullIdentityRegistry;

    const APP: &str = "https://app.starknet.id";

    #[tokio::test]
    async fn linked_account_is_decimal() {
        let registry =
            NullIdentityRegistry::new().with_data(Felt::from_u64(1), DISCORD, Felt::from_u64(0xff));
        let client = VerifierStatusClient::new(&registry);
        assert_eq!(
            client.linked_account(&Felt::from_u64(1), DISCORD).await,
            Some("255".to_string())
        );
    }

    #[tokio::test]
    async fn zero_means_unset() {
        let registry = NullIdentityRegistry::new();
        let client = VerifierStatusClient::new(&registry);
        assert_eq!(client.linked_account(&Felt::from_u64(1), DISCORD).await, None);
        assert_eq!(registry.call_count(), 1);
    }

    #[tokio::test]
    async fn failure_looks_like_unset() {
        let registry =
            NullIdentityRegistry::new().with_data(Felt::from_u64(1), DISCORD, Felt::from_u64(9));
        registry.fail();
        let client = VerifierStatusClient::new(&registry);
        assert_eq!(client.linked_account(&Felt::from_u64(1), DISCORD).await, None);
    }

    #[test]
    fn owner_with_link_can_change_it() {
        let badge = SocialBadge::discord(true, Some("255"), "ben.stark", APP).unwrap();
        assert_eq!(badge.tooltip, "Change your discord on starknet ID");
        assert!(badge.verified);
        assert_eq!(
            badge.action,
            BadgeAction::StartVerification {
                link: "https://app.starknet.id/identities".into()
            }
        );
    }

    #[test]
    fn owner_without_link_starts_verification() {
        let badge = SocialBadge::discord(true, None, "ben.stark", APP).unwrap();
        assert_eq!(badge.tooltip, "Start Discord verification");
        assert!(!badge.verified);
    }

    #[test]
    fn visitor_opens_profile() {
        let badge = SocialBadge::discord(false, Some("255"), "averyveryverylong.stark", APP).unwrap();
        assert_eq!(badge.tooltip, "Check averyveryv... discord");
        assert_eq!(
            badge.action,
            BadgeAction::OpenProfile {
                url: "https://discord.com/channels/@me/255".into()
            }
        );
    }

    #[test]
    fn visitor_without_link_sees_nothing() {
        assert_eq!(SocialBadge::discord(false, None, "ben.stark", APP), None);
    }
}
