//! Enumerations shared by several endpoint families.
//!
//! Every enumeration here travels as its upper-snake-case name, e.g.
//! `"CLIENT_SECRET_BASIC"`, never as the lowercase registry value of the
//! corresponding OAuth parameter.

wire_enum! {
    /// OAuth 2.0 grant types.
    pub enum GrantType {
        /// Authorization code grant (RFC 6749 Section 4.1).
        AuthorizationCode = "AUTHORIZATION_CODE",
        /// Implicit grant (RFC 6749 Section 4.2).
        Implicit = "IMPLICIT",
        /// Resource owner password credentials grant (RFC 6749 Section 4.3).
        Password = "PASSWORD",
        /// Client credentials grant (RFC 6749 Section 4.4).
        ClientCredentials = "CLIENT_CREDENTIALS",
        /// Refresh token grant (RFC 6749 Section 6).
        RefreshToken = "REFRESH_TOKEN",
        /// Client Initiated Backchannel Authentication.
        Ciba = "CIBA",
        /// Device authorization grant (RFC 8628).
        DeviceCode = "DEVICE_CODE",
    }
}

wire_enum! {
    /// Values of the `response_type` request parameter.
    pub enum ResponseType {
        /// `none`.
        None = "NONE",
        /// `code`.
        Code = "CODE",
        /// `token`.
        Token = "TOKEN",
        /// `id_token`.
        IdToken = "ID_TOKEN",
        /// `code token`.
        CodeToken = "CODE_TOKEN",
        /// `code id_token`.
        CodeIdToken = "CODE_ID_TOKEN",
        /// `id_token token`.
        IdTokenToken = "ID_TOKEN_TOKEN",
        /// `code id_token token`.
        CodeIdTokenToken = "CODE_ID_TOKEN_TOKEN",
    }
}

wire_enum! {
    /// Client types (RFC 6749 Section 2.1).
    pub enum ClientType {
        /// Cannot keep a secret.
        Public = "PUBLIC",
        /// Can keep a secret.
        Confidential = "CONFIDENTIAL",
    }
}

wire_enum! {
    /// Application types (OIDC Dynamic Client Registration).
    pub enum ApplicationType {
        /// Web application.
        Web = "WEB",
        /// Native application.
        Native = "NATIVE",
    }
}

wire_enum! {
    /// Subject identifier types.
    pub enum SubjectType {
        /// Same `sub` for every client.
        Public = "PUBLIC",
        /// Per-sector `sub`.
        Pairwise = "PAIRWISE",
    }
}

wire_enum! {
    /// Client authentication methods at the token endpoint.
    pub enum ClientAuthMethod {
        /// No authentication.
        None = "NONE",
        /// HTTP Basic.
        ClientSecretBasic = "CLIENT_SECRET_BASIC",
        /// Secret in the form body.
        ClientSecretPost = "CLIENT_SECRET_POST",
        /// JWT signed with the client secret.
        ClientSecretJwt = "CLIENT_SECRET_JWT",
        /// JWT signed with the client's private key.
        PrivateKeyJwt = "PRIVATE_KEY_JWT",
        /// PKI mutual TLS (RFC 8705).
        TlsClientAuth = "TLS_CLIENT_AUTH",
        /// Self-signed certificate mutual TLS (RFC 8705).
        SelfSignedTlsClientAuth = "SELF_SIGNED_TLS_CLIENT_AUTH",
    }
}

wire_enum! {
    /// JWS signing algorithms (RFC 7518 Section 3).
    pub enum JwsAlg {
        /// Unsigned.
        None = "NONE",
        /// HMAC SHA-256.
        Hs256 = "HS256",
        /// HMAC SHA-384.
        Hs384 = "HS384",
        /// HMAC SHA-512.
        Hs512 = "HS512",
        /// RSASSA-PKCS1-v1_5 SHA-256.
        Rs256 = "RS256",
        /// RSASSA-PKCS1-v1_5 SHA-384.
        Rs384 = "RS384",
        /// RSASSA-PKCS1-v1_5 SHA-512.
        Rs512 = "RS512",
        /// ECDSA P-256 SHA-256.
        Es256 = "ES256",
        /// ECDSA P-384 SHA-384.
        Es384 = "ES384",
        /// ECDSA P-521 SHA-512.
        Es512 = "ES512",
        /// RSASSA-PSS SHA-256.
        Ps256 = "PS256",
        /// RSASSA-PSS SHA-384.
        Ps384 = "PS384",
        /// RSASSA-PSS SHA-512.
        Ps512 = "PS512",
    }
}

impl JwsAlg {
    /// Whether the algorithm uses a shared secret rather than a key pair.
    #[must_use]
    pub const fn is_symmetric(self) -> bool {
        matches!(self, Self::Hs256 | Self::Hs384 | Self::Hs512)
    }
}

wire_enum! {
    /// JWE key management algorithms (RFC 7518 Section 4).
    pub enum JweAlg {
        /// RSAES-PKCS1-v1_5.
        #[allow(non_camel_case_types)]
        Rsa1_5 = "RSA1_5",
        /// RSAES OAEP.
        RsaOaep = "RSA_OAEP",
        /// RSAES OAEP SHA-256.
        RsaOaep256 = "RSA_OAEP_256",
        /// AES-128 key wrap.
        A128Kw = "A128KW",
        /// AES-192 key wrap.
        A192Kw = "A192KW",
        /// AES-256 key wrap.
        A256Kw = "A256KW",
        /// Direct symmetric encryption.
        Dir = "DIR",
        /// ECDH-ES.
        EcdhEs = "ECDH_ES",
        /// ECDH-ES with AES-128 key wrap.
        EcdhEsA128Kw = "ECDH_ES_A128KW",
        /// ECDH-ES with AES-192 key wrap.
        EcdhEsA192Kw = "ECDH_ES_A192KW",
        /// ECDH-ES with AES-256 key wrap.
        EcdhEsA256Kw = "ECDH_ES_A256KW",
        /// AES-128 GCM key wrap.
        A128GcmKw = "A128GCMKW",
        /// AES-192 GCM key wrap.
        A192GcmKw = "A192GCMKW",
        /// AES-256 GCM key wrap.
        A256GcmKw = "A256GCMKW",
        /// PBES2 HMAC SHA-256 with AES-128 key wrap.
        Pbes2Hs256A128Kw = "PBES2_HS256_A128KW",
        /// PBES2 HMAC SHA-384 with AES-192 key wrap.
        Pbes2Hs384A192Kw = "PBES2_HS384_A192KW",
        /// PBES2 HMAC SHA-512 with AES-256 key wrap.
        Pbes2Hs512A256Kw = "PBES2_HS512_A256KW",
    }
}

wire_enum! {
    /// JWE content encryption algorithms (RFC 7518 Section 5).
    pub enum JweEnc {
        /// AES-128 CBC with HMAC SHA-256.
        A128CbcHs256 = "A128CBC_HS256",
        /// AES-192 CBC with HMAC SHA-384.
        A192CbcHs384 = "A192CBC_HS384",
        /// AES-256 CBC with HMAC SHA-512.
        A256CbcHs512 = "A256CBC_HS512",
        /// AES-128 GCM.
        A128Gcm = "A128GCM",
        /// AES-192 GCM.
        A192Gcm = "A192GCM",
        /// AES-256 GCM.
        A256Gcm = "A256GCM",
    }
}

wire_enum! {
    /// Values of the `display` request parameter.
    pub enum Display {
        /// Full user-agent page.
        Page = "PAGE",
        /// Popup window.
        Popup = "POPUP",
        /// Touch interface.
        Touch = "TOUCH",
        /// Feature phone.
        Wap = "WAP",
    }
}

wire_enum! {
    /// Values of the `prompt` request parameter.
    pub enum Prompt {
        /// No user interaction allowed.
        None = "NONE",
        /// Force re-authentication.
        Login = "LOGIN",
        /// Force consent.
        Consent = "CONSENT",
        /// Ask the user to pick an account.
        SelectAccount = "SELECT_ACCOUNT",
    }
}

wire_enum! {
    /// Claim types (OIDC Core Section 5.6).
    pub enum ClaimType {
        /// Asserted directly by the provider.
        Normal = "NORMAL",
        /// Asserted by another party, returned by the provider.
        Aggregated = "AGGREGATED",
        /// Asserted by another party, returned as references.
        Distributed = "DISTRIBUTED",
    }
}

wire_enum! {
    /// Token delivery modes of backchannel authentication.
    pub enum DeliveryMode {
        /// Client polls the token endpoint.
        Poll = "POLL",
        /// Server notifies, client then fetches the tokens.
        Ping = "PING",
        /// Server pushes the tokens.
        Push = "PUSH",
    }
}

impl DeliveryMode {
    /// Whether the server calls the client's notification endpoint.
    #[must_use]
    pub const fn notifies_client(self) -> bool {
        matches!(self, Self::Ping | Self::Push)
    }
}

wire_enum! {
    /// Which hint identified the end-user in a backchannel authentication
    /// request.
    pub enum UserIdentificationHintType {
        /// `login_hint`.
        LoginHint = "LOGIN_HINT",
        /// `login_hint_token`.
        LoginHintToken = "LOGIN_HINT_TOKEN",
        /// `id_token_hint`.
        IdTokenHint = "ID_TOKEN_HINT",
    }
}

wire_enum! {
    /// Social networks a service can federate with.
    pub enum Sns {
        /// Facebook.
        Facebook = "FACEBOOK",
    }
}
