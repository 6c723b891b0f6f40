//! Wallet execution seam.

use crate::call::Call;
use crate::error::StarknetError;

/// Signs and submits a multicall. Implemented by whatever holds the account
/// keys; this workspace never signs.
#[allow(async_fn_in_trait)]
pub trait WalletExecutor {
    async fn execute(&self, calls: &[Call]) -> Result<(), StarknetError>;
}

impl<T: WalletExecutor + ?Sized> WalletExecutor for &T {
    async fn execute(&self, calls: &[Call]) -> Result<(), StarknetError> {
        (**self).execute(calls).await
    }
}
