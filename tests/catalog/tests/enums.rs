//! Wire representation of enumerations.

use std::fmt::Debug;
use std::str::FromStr;

use authlete_dto::authorization::AuthorizationFailReason;
use authlete_dto::backchannel::BackchannelAuthenticationFailReason;
use authlete_dto::client_registration::ClientRegistrationAction;
use authlete_dto::device::DeviceCompleteResult;
use authlete_dto::token::{TokenFailReason, TokenUpdateAction};
use authlete_dto::types::{ClientAuthMethod, GrantType, JweAlg, JwsAlg, ResponseType, Sns};
use authlete_dto::{DtoError, Ordinal, WireEnum};
use serde::Serialize;
use serde::de::DeserializeOwned;

fn assert_symbolic<E>()
where
    E: WireEnum + Serialize + DeserializeOwned + FromStr<Err = DtoError> + Debug,
{
    for variant in E::VARIANTS {
        let json = serde_json::to_string(variant).unwrap();
        assert_eq!(json, format!("\"{}\"", variant.as_str()), "{}", E::NAME);
        let back: E = serde_json::from_str(&json).unwrap();
        assert_eq!(back, *variant);
        assert_eq!(E::from_str(variant.as_str()).unwrap(), *variant);
    }
    assert!(serde_json::from_str::<E>(r#""NOT_A_VARIANT""#).is_err());
    assert!(matches!(
        E::from_str("NOT_A_VARIANT"),
        Err(DtoError::UnknownVariant { .. })
    ));
}

#[test]
fn enums_travel_as_names() {
    assert_symbolic::<GrantType>();
    assert_symbolic::<ResponseType>();
    assert_symbolic::<ClientAuthMethod>();
    assert_symbolic::<JwsAlg>();
    assert_symbolic::<JweAlg>();
    assert_symbolic::<AuthorizationFailReason>();
    assert_symbolic::<TokenFailReason>();
    assert_symbolic::<TokenUpdateAction>();
    assert_symbolic::<DeviceCompleteResult>();
    assert_symbolic::<BackchannelAuthenticationFailReason>();
    assert_symbolic::<ClientRegistrationAction>();
    assert_symbolic::<Sns>();
}

#[test]
fn enums_are_never_ordinals_by_default() {
    assert!(serde_json::from_str::<GrantType>("0").is_err());
    assert!(serde_json::from_str::<Sns>("0").is_err());
}

#[test]
fn ordinal_fields() {
    assert_eq!(serde_json::to_string(&Ordinal(Sns::Facebook)).unwrap(), "0");
    let sns: Ordinal<Sns> = serde_json::from_str("0").unwrap();
    assert_eq!(sns.into_inner(), Sns::Facebook);
    assert!(serde_json::from_str::<Ordinal<Sns>>("1").is_err());
    assert!(serde_json::from_str::<Ordinal<Sns>>(r#""FACEBOOK""#).is_err());
}

#[test]
fn legacy_forbidden_spelling_is_read_not_written() {
    let action: TokenUpdateAction = serde_json::from_str(r#""FORBIDEN""#).unwrap();
    assert_eq!(action, TokenUpdateAction::Forbidden);
    assert_eq!(TokenUpdateAction::from_str("FORBIDEN").unwrap(), action);
    assert_eq!(serde_json::to_string(&action).unwrap(), r#""FORBIDDEN""#);
    assert_eq!(action.to_string(), "FORBIDDEN");
}
