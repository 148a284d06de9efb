use reqwest::Client;

use crate::SmokeError;

// Adiciona uma listagem ao carrinho. O endpoint espera corpo
// form-urlencoded, não JSON (contrato herdado do front).
pub async fn add_to_cart(
    client: &Client,
    base_url: &str,
    product_id: u32,
    quantity: u32,
) -> Result<String, SmokeError> {
    let resp = client
        .post(format!("{}/cart_functionalities.php", base_url))
        .form(&[
            ("action", "add".to_string()),
            ("product_ID", product_id.to_string()),
            ("quantity", quantity.to_string()),
        ])
        .send()
        .await?;
    Ok(resp.text().await?)
}

// Carrega o carrinho da sessão atual. Devolve o corpo cru: só o chamador
// decide se ele é JSON válido (e imprime a resposta bruta quando não é).
pub async fn load_cart(client: &Client, base_url: &str) -> Result<String, SmokeError> {
    let resp = client
        .get(format!("{}/cart_functionalities.php?action=load", base_url))
        .send()
        .await?;
    Ok(resp.text().await?)
}
