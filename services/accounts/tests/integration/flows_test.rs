//! End-to-end journeys across use cases and ports: signup → verify → login,
//! and the password-reset loop.

use mingle_accounts::domain::repository::{SecretHasher, UserDirectory};
use mingle_accounts::domain::types::PasscodePurpose;
use mingle_accounts::error::AccountsServiceError;
use mingle_accounts::usecase::passcode::{
    RequestPasscodeInput, RequestPasscodeUseCase, VerifyPasscodeInput, VerifyPasscodeUseCase,
};
use mingle_accounts::usecase::session::{LoginInput, LoginUseCase};
use mingle_accounts::usecase::signup::{RegisterAccountInput, RegisterAccountUseCase};

use crate::helpers::{
    FakeHasher, MemoryPasscodeStore, MockUserDirectory, RecordingMailer, last_code,
    TEST_JWT_SECRET, test_account,
};

#[tokio::test]
async fn signup_verification_journey_unlocks_login() {
    let directory = MockUserDirectory::empty();
    let store = MemoryPasscodeStore::new();
    let mailer = RecordingMailer::new();
    let sent = mailer.handle();

    // Register → unverified account, login refused.
    let register = RegisterAccountUseCase {
        directory: directory.share(),
        hasher: FakeHasher,
    };
    register
        .execute(RegisterAccountInput {
            name: "Ada Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "difference-engine".to_owned(),
        })
        .await
        .unwrap();

    let login = LoginUseCase {
        directory: directory.share(),
        hasher: FakeHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let gated = login
        .execute(LoginInput {
            email: "ada@example.com".to_owned(),
            password: "difference-engine".to_owned(),
        })
        .await;
    assert!(matches!(gated, Err(AccountsServiceError::AccountNotVerified)));

    // Issue + confirm the signup passcode, then apply the side effect the
    // way the verification handler does.
    let request = RequestPasscodeUseCase {
        passcodes: store.share(),
        hasher: FakeHasher,
        mailer,
    };
    request
        .execute(RequestPasscodeInput {
            email: "ada@example.com".to_owned(),
            purpose: PasscodePurpose::SignupVerification,
            ttl_hours: 1,
        })
        .await
        .unwrap();
    let code = last_code(&sent);

    let verify = VerifyPasscodeUseCase {
        passcodes: store.share(),
        hasher: FakeHasher,
    };
    verify
        .execute(VerifyPasscodeInput {
            email: "ada@example.com".to_owned(),
            candidate: code,
        })
        .await
        .unwrap();
    assert!(directory.mark_verified("ada@example.com").await.unwrap());
    {
        let accounts = directory.handle();
        let accounts = accounts.lock().unwrap();
        assert!(accounts[0].verified_at.is_some());
    }

    // Gate lifted.
    let session = login
        .execute(LoginInput {
            email: "ada@example.com".to_owned(),
            password: "difference-engine".to_owned(),
        })
        .await
        .unwrap();
    assert!(!session.access_token.is_empty());
}

#[tokio::test]
async fn password_reset_journey_replaces_credential() {
    let directory = MockUserDirectory::new(vec![test_account("ada@example.com", true)]);
    let store = MemoryPasscodeStore::new();
    let mailer = RecordingMailer::new();
    let sent = mailer.handle();

    let request = RequestPasscodeUseCase {
        passcodes: store.share(),
        hasher: FakeHasher,
        mailer,
    };
    request
        .execute(RequestPasscodeInput {
            email: "ada@example.com".to_owned(),
            purpose: PasscodePurpose::PasswordReset,
            ttl_hours: 1,
        })
        .await
        .unwrap();
    let code = last_code(&sent);

    // Wrong candidate first: record survives, password untouched.
    let verify = VerifyPasscodeUseCase {
        passcodes: store.share(),
        hasher: FakeHasher,
    };
    let wrong = if code == "0000" { "0001" } else { "0000" };
    let result = verify
        .execute(VerifyPasscodeInput {
            email: "ada@example.com".to_owned(),
            candidate: wrong.to_owned(),
        })
        .await;
    assert!(matches!(result, Err(AccountsServiceError::PasscodeMismatch)));

    // Correct candidate consumes the code; apply the side effect the way
    // the reset handler does.
    verify
        .execute(VerifyPasscodeInput {
            email: "ada@example.com".to_owned(),
            candidate: code,
        })
        .await
        .unwrap();
    let new_hash = FakeHasher.hash("analytical-engine").unwrap();
    assert!(
        directory
            .update_password("ada@example.com", &new_hash)
            .await
            .unwrap()
    );

    let login = LoginUseCase {
        directory: directory.share(),
        hasher: FakeHasher,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let stale = login
        .execute(LoginInput {
            email: "ada@example.com".to_owned(),
            password: "difference-engine".to_owned(),
        })
        .await;
    assert!(matches!(stale, Err(AccountsServiceError::InvalidCredentials)));

    login
        .execute(LoginInput {
            email: "ada@example.com".to_owned(),
            password: "analytical-engine".to_owned(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn side_effect_reports_missing_account_after_valid_proof() {
    // A valid proof for an identity the directory no longer knows: the
    // verification handler maps the false return to UserNotFound.
    let directory = MockUserDirectory::empty();
    assert!(!directory.mark_verified("ghost@example.com").await.unwrap());
    assert!(
        !directory
            .update_password("ghost@example.com", "hashed:x")
            .await
            .unwrap()
    );
}
