use std::hash::{DefaultHasher, Hash, Hasher};

use reqwest::Client;
use serde_json::json;

use crate::SmokeError;

#[derive(Debug, Clone)]
pub struct Credenciais {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Deriva as credenciais do usuário de teste a partir de um salt fixo.
/// O hash é determinístico e truncado em 5 caracteres, então execuções
/// repetidas caem no mesmo usuário (comportamento herdado, mantido de
/// propósito: o registro tolera "já cadastrado").
pub fn gerar_credenciais() -> Credenciais {
    let mut hasher = DefaultHasher::new();
    "salt".hash(&mut hasher);
    let hash = hasher.finish().to_string();
    let corte = hash.len().min(5);
    let username = format!("testuser_{}", &hash[..corte]);

    Credenciais {
        email: format!("{}@example.com", username),
        username,
        password: "password123".to_string(),
    }
}

// Registra o usuário. A resposta não é inspecionada: se o usuário já
// existe, o login logo em seguida estabelece a sessão do mesmo jeito.
pub async fn register(
    client: &Client,
    base_url: &str,
    cred: &Credenciais,
) -> Result<(), SmokeError> {
    client
        .post(format!("{}/api/auth.php?action=register", base_url))
        .json(&json!({
            "username": cred.username,
            "email": cred.email,
            "password": cred.password,
        }))
        .send()
        .await?;
    Ok(())
}

// Faz login e devolve a resposta inteira: o chamador confere o status
// (checagem branda) e imprime o corpo.
pub async fn login(
    client: &Client,
    base_url: &str,
    cred: &Credenciais,
) -> Result<reqwest::Response, SmokeError> {
    let resp = client
        .post(format!("{}/api/auth.php?action=login", base_url))
        .json(&json!({
            "username": cred.username,
            "password": cred.password,
        }))
        .send()
        .await?;
    Ok(resp)
}
