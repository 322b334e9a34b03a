pub mod chirp;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod delete;
pub mod edit;
pub mod show;
pub mod timeline;
pub mod tui;
pub mod whoami;

pub use context::HandlerContext;

use anyhow::anyhow;
use uuid::Uuid;

/// Reword a missing chirp; every other error passes through.
pub(crate) fn not_found_as_chirp(
    id: Uuid,
) -> impl FnOnce(chipchip_runtime::Error) -> anyhow::Error {
    move |err| match err {
        chipchip_runtime::Error::Api(chipchip_client::Error::NotFound(_)) => {
            anyhow!("Chirp not found: {}", id)
        }
        other => with_retry_hint(other),
    }
}

/// Suggest running the command again when the failure is transient.
pub(crate) fn with_retry_hint(err: chipchip_runtime::Error) -> anyhow::Error {
    if err.is_retryable() {
        anyhow!("{} (temporary failure, try again)", err)
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_hint_only_for_transient_failures() {
        let outage = chipchip_runtime::Error::Api(chipchip_client::Error::Server {
            status: 503,
            message: "Service Unavailable".to_string(),
        });
        assert_eq!(
            with_retry_hint(outage).to_string(),
            "HTTP 503: Service Unavailable (temporary failure, try again)"
        );

        let refused =
            chipchip_runtime::Error::Api(chipchip_client::Error::Unauthorized("nope".to_string()));
        assert_eq!(with_retry_hint(refused).to_string(), "Unauthorized: nope");
    }

    #[test]
    fn test_missing_chirp_is_reworded() {
        let id = Uuid::nil();
        let missing = chipchip_runtime::Error::Api(chipchip_client::Error::NotFound(
            "Tweet not found".to_string(),
        ));
        assert_eq!(
            not_found_as_chirp(id)(missing).to_string(),
            format!("Chirp not found: {}", id)
        );
    }
}
