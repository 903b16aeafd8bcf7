//! Email verification codes. These endpoints need no token.

use std::sync::Arc;

use aivyra_shared::{CodeType, SendVerificationCodeRequest, VerifyCodeRequest};

use super::Operation;
use crate::api::AivyraApi;
use crate::resource::Resource;

const SEND: Operation = Operation::new("verification.send", "Failed to send verification code");
const VERIFY: Operation = Operation::new("verification.verify", "Invalid verification code");
const RESEND: Operation = Operation::new("verification.resend", "Failed to resend verification code");

#[derive(Clone)]
pub struct VerificationRepository {
    api: Arc<dyn AivyraApi>,
}

impl VerificationRepository {
    pub fn new(api: Arc<dyn AivyraApi>) -> Self {
        Self { api }
    }

    pub async fn send_code(&self, email: &str, code_type: CodeType) -> Resource<String> {
        let request = SendVerificationCodeRequest {
            email: email.to_string(),
            code_type,
        };
        SEND.server_message(
            self.api.send_verification_code(&request).await,
            "Verification code sent",
        )
    }

    pub async fn verify_code(&self, email: &str, code: &str, code_type: CodeType) -> Resource<String> {
        let request = VerifyCodeRequest {
            email: email.to_string(),
            code: code.to_string(),
            code_type,
        };
        VERIFY.server_message(
            self.api.verify_code(&request).await,
            "Code verified successfully",
        )
    }

    pub async fn resend_code(&self, email: &str, code_type: CodeType) -> Resource<String> {
        let request = SendVerificationCodeRequest {
            email: email.to_string(),
            code_type,
        };
        RESEND.server_message(
            self.api.resend_verification_code(&request).await,
            "Verification code sent",
        )
    }
}
