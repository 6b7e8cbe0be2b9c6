use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Url;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::error::StoreError;
use crate::records::{PoolMemberRecord, PoolRecord, PoolStopRecord};
use crate::store::{PoolStore, Table};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    pub timeout: Duration,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self::new(String::new(), String::new())
    }
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Both values must be present and non-blank for persistence to be on.
    pub fn from_parts(url: Option<&str>, anon_key: Option<&str>) -> Option<Self> {
        let url = url.map(str::trim).filter(|value| !value.is_empty())?;
        let anon_key = anon_key.map(str::trim).filter(|value| !value.is_empty())?;
        Some(Self::new(url, anon_key))
    }
}

/// PostgREST client for a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: Client,
    rest_base: Url,
    anon_key: String,
}

impl SupabaseStore {
    pub fn new(config: &SupabaseConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(StoreError::Client)?;

        let base = format!("{}/rest/v1/", config.url.trim_end_matches('/'));
        let rest_base = Url::parse(&base)
            .map_err(|err| StoreError::Url(format!("failed to build Supabase URL: {}", err)))?;

        Ok(Self {
            client,
            rest_base,
            anon_key: config.anon_key.clone(),
        })
    }

    pub fn table_url(&self, table: Table) -> Result<Url, StoreError> {
        self.rest_base
            .join(table.as_str())
            .map_err(|err| StoreError::Url(format!("failed to build table URL: {}", err)))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
    }

    fn insert<T: Serialize + ?Sized>(&self, table: Table, body: &T) -> Result<(), StoreError> {
        let url = self.table_url(table)?;
        debug!(table = table.as_str(), "inserting rows");
        let response = self.authorized(self.client.post(url)).json(body).send()?;
        check_status(table, response)
    }

    fn update_pool<T: Serialize + ?Sized>(&self, pool_id: &str, body: &T) -> Result<(), StoreError> {
        let mut url = self.table_url(Table::Pools)?;
        url.query_pairs_mut().append_pair("id", &format!("eq.{}", pool_id));
        debug!(pool_id, "updating pool row");
        let response = self.authorized(self.client.patch(url)).json(body).send()?;
        check_status(Table::Pools, response)
    }

    fn delete_for_pool(&self, table: Table, pool_id: &str) -> Result<(), StoreError> {
        let mut url = self.table_url(table)?;
        url.query_pairs_mut()
            .append_pair("pool_id", &format!("eq.{}", pool_id));
        debug!(table = table.as_str(), pool_id, "deleting rows");
        let response = self.authorized(self.client.delete(url)).send()?;
        check_status(table, response)
    }
}

fn check_status(table: Table, response: Response) -> Result<(), StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().unwrap_or_default();
    Err(StoreError::Api {
        table: table.as_str(),
        status: status.as_u16(),
        body,
    })
}

impl PoolStore for SupabaseStore {
    fn insert_pool(&self, record: &PoolRecord) -> Result<(), StoreError> {
        self.insert(Table::Pools, record)
    }

    fn update_owner(&self, pool_id: &str, owner_id: Option<&str>) -> Result<(), StoreError> {
        self.update_pool(pool_id, &json!({ "owner_id": owner_id }))
    }

    fn insert_members(&self, records: &[PoolMemberRecord]) -> Result<(), StoreError> {
        self.insert(Table::PoolMembers, records)
    }

    fn insert_stops(&self, records: &[PoolStopRecord]) -> Result<(), StoreError> {
        self.insert(Table::PoolStops, records)
    }

    fn delete_members(&self, pool_id: &str) -> Result<(), StoreError> {
        self.delete_for_pool(Table::PoolMembers, pool_id)
    }

    fn delete_stops(&self, pool_id: &str) -> Result<(), StoreError> {
        self.delete_for_pool(Table::PoolStops, pool_id)
    }
}
