//! Token commands - issue and verify tokens from the command line

use clap::Args;
use serde::Serialize;

use crate::domain::token::{Claims, Expiry, Header, TokenError};
use crate::infrastructure::auth::{
    self, HmacTokenService, Secret, TokenConfig, TokenService, DEFAULT_EXPIRES_IN_SECS,
};

/// Arguments for the issue command
#[derive(Args, Clone, Debug)]
pub struct IssueArgs {
    /// Principal id to embed in the token
    #[arg(long)]
    pub uid: i64,

    /// Signing secret
    #[arg(long)]
    pub secret: String,

    /// Token lifetime in seconds
    #[arg(long, default_value_t = DEFAULT_EXPIRES_IN_SECS)]
    pub expires_in: u64,

    /// Absolute expiry in unix seconds (overrides --expires-in)
    #[arg(long)]
    pub exp: Option<i64>,
}

/// Arguments for the verify command
#[derive(Args, Clone, Debug)]
pub struct VerifyArgs {
    /// Token to verify
    pub token: String,

    /// Signing secret
    #[arg(long)]
    pub secret: String,
}

/// Decoded token as printed by `verify`
#[derive(Debug, Serialize)]
pub struct VerifiedToken {
    pub header: Header,
    pub payload: Claims,
}

/// Print a freshly issued token
pub fn issue(args: IssueArgs) -> anyhow::Result<()> {
    println!("{}", issue_token(&args)?);
    Ok(())
}

/// Print the decoded token, failing on an invalid or expired one
pub fn verify(args: VerifyArgs) -> anyhow::Result<()> {
    let verified = verify_token(&args)?;
    println!("{}", serde_json::to_string_pretty(&verified)?);
    Ok(())
}

fn issue_token(args: &IssueArgs) -> anyhow::Result<String> {
    let secret = Secret::from_bytes(&args.secret)?;

    let token = match args.exp {
        Some(exp) => auth::issue(Expiry::from_secs(exp), args.uid, secret.as_bytes()),
        None => {
            let service = HmacTokenService::new(TokenConfig::new(args.expires_in), secret);
            service.issue(args.uid).token
        }
    };

    Ok(token)
}

fn verify_token(args: &VerifyArgs) -> anyhow::Result<VerifiedToken> {
    let secret = Secret::from_bytes(&args.secret)?;

    match auth::decode(args.token.trim(), secret.as_bytes()) {
        Ok((header, payload)) => Ok(VerifiedToken { header, payload }),
        Err(TokenError::Expired) => anyhow::bail!("Token has expired"),
        Err(e @ TokenError::Invalid(_)) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue_args(uid: i64, exp: Option<i64>) -> IssueArgs {
        IssueArgs {
            uid,
            secret: "secret".to_string(),
            expires_in: DEFAULT_EXPIRES_IN_SECS,
            exp,
        }
    }

    fn verify_args(token: String, secret: &str) -> VerifyArgs {
        VerifyArgs {
            token,
            secret: secret.to_string(),
        }
    }

    #[test]
    fn test_issue_with_absolute_expiry() {
        let token = issue_token(&issue_args(1, Some(2_000_000_000))).unwrap();
        assert_eq!(token, auth::issue(2_000_000_000_i64, 1, b"secret"));
    }

    #[test]
    fn test_issue_then_verify() {
        let token = issue_token(&issue_args(3, None)).unwrap();
        let verified = verify_token(&verify_args(token, "secret")).unwrap();

        assert_eq!(verified.header, Header::hs256());
        assert_eq!(verified.payload.uid, 3);
    }

    #[test]
    fn test_issue_uses_requested_lifetime() {
        let mut args = issue_args(2, None);
        args.expires_in = 60;

        let before = auth::unix_now();
        let token = issue_token(&args).unwrap();
        let (_, claims) = auth::decode(&token, b"secret").unwrap();

        assert!(claims.exp.as_secs_f64() >= before + 60.0);
        assert!(claims.exp.as_secs_f64() < before + 120.0);
    }

    #[test]
    fn test_verify_wrong_secret() {
        let token = issue_token(&issue_args(3, None)).unwrap();
        let err = verify_token(&verify_args(token, "wrong")).unwrap_err();

        assert!(err.to_string().starts_with("Invalid token"));
    }

    #[test]
    fn test_verify_expired() {
        let token = issue_token(&issue_args(3, Some(1))).unwrap();
        let err = verify_token(&verify_args(token, "secret")).unwrap_err();

        assert_eq!(err.to_string(), "Token has expired");
    }

    #[test]
    fn test_empty_secret_rejected() {
        let mut args = issue_args(1, None);
        args.secret = String::new();

        assert!(issue_token(&args).is_err());
    }

    #[test]
    fn test_verified_token_output() {
        let token = issue_token(&issue_args(1, Some(2_000_000_000))).unwrap();
        let verified = verify_token(&verify_args(token, "secret")).unwrap();

        let json = serde_json::to_string(&verified).unwrap();
        assert_eq!(
            json,
            r#"{"header":{"alg":"HS256","typ":"JWT"},"payload":{"exp":2000000000,"uid":1}}"#
        );
    }
}
