// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::ItemBackend;
use crate::error::{LedgerError, Result};
use crate::models::{Item, ItemDraft, MonthlyBudget};

const UA: &str = concat!(
    "tallybook/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/tallybook)"
);

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// REST binding: `GET/POST /items`, `PUT/DELETE /items/{id}`,
/// `GET/PUT /budgets/{month}`. The base URL is fixed at construction;
/// there is no process-wide default to mutate.
pub struct HttpBackend {
    base_url: Url,
    http: Client,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self> {
        // Url::join replaces the last path segment unless the base ends
        // with a slash.
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|err| LedgerError::Transport(format!("invalid base url '{}': {}", base_url, err)))?;
        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(UA)
            .build()?;
        Ok(HttpBackend { base_url, http })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|err| LedgerError::Transport(format!("invalid endpoint '{}': {}", path, err)))
    }
}

/// Map a non-success response onto the error taxonomy. A 404 is `NotFound`
/// only where the request named an id; everywhere else the status is a
/// transport fault, with the server's error body when it decodes.
fn fail(res: Response, id: Option<i64>) -> LedgerError {
    let status = res.status();
    let body = res
        .json::<ErrorResponse>()
        .map(|e| e.error)
        .unwrap_or_else(|_| "unknown error".to_string());
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => LedgerError::NotFound(id),
        _ => LedgerError::Transport(format!("server returned {}: {}", status, body)),
    }
}

impl ItemBackend for HttpBackend {
    fn list(&self) -> Result<Vec<Item>> {
        let res = self.http.get(self.endpoint("items")?).send()?;
        if !res.status().is_success() {
            return Err(fail(res, None));
        }
        // An empty store serializes as `null` on some servers.
        let items: Option<Vec<Item>> = res.json()?;
        Ok(items.unwrap_or_default())
    }

    fn add(&self, draft: &ItemDraft) -> Result<Item> {
        let res = self
            .http
            .post(self.endpoint("items")?)
            .json(draft)
            .send()?;
        if !res.status().is_success() {
            return Err(fail(res, None));
        }
        Ok(res.json::<Item>()?)
    }

    fn update(&self, id: i64, draft: &ItemDraft) -> Result<()> {
        let res = self
            .http
            .put(self.endpoint(&format!("items/{}", id))?)
            .json(draft)
            .send()?;
        if !res.status().is_success() {
            return Err(fail(res, Some(id)));
        }
        // Some servers return the updated record, others nothing; drop
        // any body either way.
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<()> {
        let res = self
            .http
            .delete(self.endpoint(&format!("items/{}", id))?)
            .send()?;
        if !res.status().is_success() {
            return Err(fail(res, Some(id)));
        }
        Ok(())
    }

    fn monthly_budget(&self, month: &str) -> Result<Option<Decimal>> {
        let res = self
            .http
            .get(self.endpoint(&format!("budgets/{}", month))?)
            .send()?;
        if res.status() == StatusCode::NOT_FOUND {
            // Absent resource means no budget set, not an error.
            return Ok(None);
        }
        if !res.status().is_success() {
            return Err(fail(res, None));
        }
        let budget: Option<MonthlyBudget> = res.json()?;
        Ok(budget.map(|b| b.amount))
    }

    fn set_monthly_budget(&self, month: &str, amount: Decimal) -> Result<()> {
        let body = MonthlyBudget {
            month: month.to_string(),
            amount,
        };
        let res = self
            .http
            .put(self.endpoint(&format!("budgets/{}", month))?)
            .json(&body)
            .send()?;
        if !res.status().is_success() {
            return Err(fail(res, None));
        }
        Ok(())
    }
}
