//! サービスアカウント認証
//!
//! RS256で署名したJWTをトークンエンドポイントに送り、
//! アクセストークンと交換する（OAuth2 JWT bearer grant）。

use crate::error::{Result, SheetExportError};
use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use ring::signature::RsaKeyPair;
use serde::{Deserialize, Serialize};

const SHEETS_READ_ONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// サービスアカウントキー（JSON）のうち認証に使う項目
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccount {
    pub client_email: String,
    private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

#[derive(Serialize)]
struct JwtHeader<'a> {
    alg: &'static str,
    typ: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kid: Option<&'a str>,
}

#[derive(Serialize)]
struct JwtClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    exp: i64,
    iat: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
}

impl ServiceAccount {
    pub fn try_from_str(input: &str) -> Result<Self> {
        serde_json::from_str(input)
            .map_err(|e| SheetExportError::Credentials(format!("JSONとして読めません: {}", e)))
    }

    /// 署名前の `header.claims`
    fn signing_input(&self, now: DateTime<Utc>) -> Result<String> {
        let header = JwtHeader {
            alg: "RS256",
            typ: "JWT",
            kid: self.private_key_id.as_deref(),
        };
        let claims = JwtClaims {
            iss: &self.client_email,
            scope: SHEETS_READ_ONLY_SCOPE,
            aud: &self.token_uri,
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
        };

        let header_b64 = BASE64_URL_SAFE_NO_PAD.encode(serde_json::to_string(&header)?);
        let claims_b64 = BASE64_URL_SAFE_NO_PAD.encode(serde_json::to_string(&claims)?);
        Ok(format!("{}.{}", header_b64, claims_b64))
    }

    fn key_pair(&self) -> Result<RsaKeyPair> {
        let mut reader = std::io::Cursor::new(self.private_key.as_bytes());
        let item = rustls_pemfile::read_one(&mut reader)
            .map_err(|e| SheetExportError::Credentials(format!("秘密鍵のPEMが不正: {}", e)))?;

        match item {
            Some(rustls_pemfile::Item::Pkcs8Key(der)) => RsaKeyPair::from_pkcs8(der.secret_pkcs8_der())
                .map_err(|e| SheetExportError::Credentials(format!("PKCS#8鍵を読めません: {}", e))),
            Some(rustls_pemfile::Item::Pkcs1Key(der)) => RsaKeyPair::from_der(der.secret_pkcs1_der())
                .map_err(|e| SheetExportError::Credentials(format!("PKCS#1鍵を読めません: {}", e))),
            _ => Err(SheetExportError::Credentials("RSA秘密鍵が見つかりません".into())),
        }
    }

    /// 署名済みJWT
    pub fn signed_jwt(&self, now: DateTime<Utc>) -> Result<String> {
        let key_pair = self.key_pair()?;
        let signing_input = self.signing_input(now)?;

        let mut signature = vec![0; key_pair.public().modulus_len()];
        key_pair
            .sign(
                &ring::signature::RSA_PKCS1_SHA256,
                &ring::rand::SystemRandom::new(),
                signing_input.as_bytes(),
                &mut signature,
            )
            .map_err(|_| SheetExportError::Auth("JWTの署名に失敗".into()))?;

        Ok(format!("{}.{}", signing_input, BASE64_URL_SAFE_NO_PAD.encode(&signature)))
    }

    /// アクセストークンを取得
    pub async fn fetch_access_token(&self, http: &reqwest::Client) -> Result<AccessToken> {
        let jwt = self.signed_jwt(Utc::now())?;
        let params = [
            ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
            ("assertion", jwt.as_str()),
        ];

        let response = http
            .post(&self.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| SheetExportError::Auth(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetExportError::Auth(format!("{}: {}", status, body)));
        }

        response
            .json::<AccessToken>()
            .await
            .map_err(|e| SheetExportError::Auth(format!("トークン応答を解析できません: {}", e)))
    }
}
