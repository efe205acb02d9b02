use serde::Serialize;

use crate::core::{ApiError, LsClient};

const STATIC_DATA_QUERY: &str = r#"query LiveSaleStaticData($saleID: String!) {
  sale(id: $saleID) {
    id: _id
    name
    description
    currency
    symbol
    start_at
    end_at
    sale_artworks(all: true) {
      id: _id
      position
      lot_label
      artwork {
        id: _id
        title
        artist_name: display_artist_name
        image {
          url(version: "large")
        }
      }
    }
  }
  causality_jwt(role: PARTICIPANT, sale_id: $saleID)
  me {
    paddle_number
  }
}"#;

#[derive(Serialize)]
struct Variables<'a> {
    #[serde(rename = "saleID")]
    sale_id: &'a str,
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'static str,
    variables: Variables<'a>,
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err, fields(url = %client.base_graphql())))]
pub(crate) async fn fetch_static_body(client: &LsClient, sale_id: &str) -> Result<String, ApiError> {
    let body = GraphqlRequest {
        query: STATIC_DATA_QUERY,
        variables: Variables { sale_id },
    };

    let resp = client
        .http()
        .post(client.base_graphql().clone())
        .json(&body)
        .send()
        .await?;

    if !resp.status().is_success() {
        return Err(ApiError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    crate::core::fixtures::record_if_enabled("live_static", sale_id, &text);

    Ok(text)
}
