//! Order Repository

use super::{RepoError, RepoResult};
use shared::models::{
    NewOrder, Order, OrderFilter, OrderPage, OrderStats, OrderStatus, Pagination, StatusCount,
};
use shared::{money, util};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::fmt;

const COLUMNS: &str = "id, order_id, customer_full_name, customer_phone, customer_email, \
     delivery_address, city, product_name, product_category, quantity, unit_price_ghs, \
     total_price_ghs, additional_notes, order_status, created_at, updated_at";

/// How an admin route addresses an order: numeric row id or `ORD-` reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderKey {
    Id(i64),
    Reference(String),
}

impl OrderKey {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Reference(raw.to_string()),
        }
    }

    fn where_clause(&self) -> &'static str {
        match self {
            Self::Id(_) => "id = ?",
            Self::Reference(_) => "order_id = ?",
        }
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Reference(r) => f.write_str(r),
        }
    }
}

fn not_found(key: &OrderKey) -> RepoError {
    RepoError::NotFound(format!("Order {key}"))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    find(pool, &OrderKey::Id(id)).await
}

pub async fn find(pool: &SqlitePool, key: &OrderKey) -> RepoResult<Option<Order>> {
    let sql = format!("SELECT {COLUMNS} FROM orders WHERE {}", key.where_clause());
    let query = sqlx::query_as::<_, Order>(&sql);
    let query = match key {
        OrderKey::Id(id) => query.bind(*id),
        OrderKey::Reference(r) => query.bind(r.as_str()),
    };
    Ok(query.fetch_optional(pool).await?)
}

/// Fresh (row id, reference) pairs tried per insert
const CREATE_ATTEMPTS: usize = 3;

/// Insert a validated order with a fresh id, reference and `Pending` status
pub async fn create(pool: &SqlitePool, data: NewOrder) -> RepoResult<Order> {
    create_with_keys(pool, &data, || {
        (util::snowflake_id(), util::order_reference(util::now_millis()))
    })
    .await
}

/// Insert, drawing a new key pair from `next_keys` whenever one collides
async fn create_with_keys(
    pool: &SqlitePool,
    data: &NewOrder,
    mut next_keys: impl FnMut() -> (i64, String),
) -> RepoResult<Order> {
    let mut attempt = 1;
    loop {
        let (id, order_id) = next_keys();
        match insert(pool, data, id, &order_id).await {
            Ok(()) => {
                return find_by_id(pool, id)
                    .await?
                    .ok_or_else(|| RepoError::Database("Failed to create order".into()));
            }
            Err(RepoError::Duplicate(msg)) if attempt < CREATE_ATTEMPTS => {
                tracing::warn!(id, %order_id, attempt, error = %msg, "Order key collision, retrying");
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

async fn insert(pool: &SqlitePool, data: &NewOrder, id: i64, order_id: &str) -> RepoResult<()> {
    let now = util::now_millis();
    sqlx::query(
        "INSERT INTO orders (id, order_id, customer_full_name, customer_phone, customer_email, \
         delivery_address, city, product_name, product_category, quantity, unit_price_ghs, \
         total_price_ghs, additional_notes, order_status, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(order_id)
    .bind(&data.customer_full_name)
    .bind(&data.customer_phone)
    .bind(&data.customer_email)
    .bind(&data.delivery_address)
    .bind(&data.city)
    .bind(&data.product_name)
    .bind(&data.product_category)
    .bind(data.quantity)
    .bind(data.unit_price_ghs)
    .bind(data.total_price_ghs)
    .bind(&data.additional_notes)
    .bind(OrderStatus::Pending.as_str())
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn push_filter(qb: &mut QueryBuilder<'_, Sqlite>, filter: &OrderFilter) {
    qb.push(" WHERE 1 = 1");
    if let Some(status) = filter.status {
        qb.push(" AND order_status = ").push_bind(status.as_str());
    }
    if let Some(search) = &filter.search {
        // SQLite LIKE is case-insensitive for ASCII
        let pattern = format!("%{}%", escape_like(search));
        qb.push(" AND (customer_full_name LIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\' OR customer_phone LIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\' OR order_id LIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\')");
    }
    if let Some(from) = filter.created_from {
        qb.push(" AND created_at >= ").push_bind(from);
    }
    if let Some(to) = filter.created_to {
        qb.push(" AND created_at <= ").push_bind(to);
    }
}

pub async fn count(pool: &SqlitePool, filter: &OrderFilter) -> RepoResult<i64> {
    let mut qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM orders");
    push_filter(&mut qb, filter);
    Ok(qb.build_query_scalar::<i64>().fetch_one(pool).await?)
}

/// One page of matching orders, newest first
pub async fn list(pool: &SqlitePool, filter: &OrderFilter) -> RepoResult<OrderPage> {
    let total = count(pool, filter).await?;

    let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT {COLUMNS} FROM orders"));
    push_filter(&mut qb, filter);
    qb.push(" ORDER BY created_at DESC, id DESC LIMIT ")
        .push_bind(i64::from(filter.limit))
        .push(" OFFSET ")
        .push_bind(filter.offset());
    let orders = qb.build_query_as::<Order>().fetch_all(pool).await?;

    Ok(OrderPage {
        orders,
        pagination: Pagination::new(filter.page, filter.limit, total),
    })
}

/// Every order, newest first (exports)
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let sql = format!("SELECT {COLUMNS} FROM orders ORDER BY created_at DESC, id DESC");
    Ok(sqlx::query_as::<_, Order>(&sql).fetch_all(pool).await?)
}

/// Change the status and touch `updated_at`; totals are never recomputed.
pub async fn update_status(
    pool: &SqlitePool,
    key: &OrderKey,
    status: OrderStatus,
) -> RepoResult<Order> {
    let sql = format!(
        "UPDATE orders SET order_status = ?, updated_at = ? WHERE {}",
        key.where_clause()
    );
    let query = sqlx::query(&sql)
        .bind(status.as_str())
        .bind(util::now_millis());
    let query = match key {
        OrderKey::Id(id) => query.bind(*id),
        OrderKey::Reference(r) => query.bind(r.as_str()),
    };
    let rows = query.execute(pool).await?;
    if rows.rows_affected() == 0 {
        return Err(not_found(key));
    }
    find(pool, key).await?.ok_or_else(|| not_found(key))
}

pub async fn delete(pool: &SqlitePool, key: &OrderKey) -> RepoResult<()> {
    let sql = format!("DELETE FROM orders WHERE {}", key.where_clause());
    let query = sqlx::query(&sql);
    let query = match key {
        OrderKey::Id(id) => query.bind(*id),
        OrderKey::Reference(r) => query.bind(r.as_str()),
    };
    let rows = query.execute(pool).await?;
    if rows.rows_affected() == 0 {
        return Err(not_found(key));
    }
    Ok(())
}

/// Counts for every status (zero included), total count and revenue over all orders
pub async fn stats(pool: &SqlitePool) -> RepoResult<OrderStats> {
    let grouped = sqlx::query_as::<_, StatusCount>(
        "SELECT order_status AS status, COUNT(*) AS count FROM orders GROUP BY order_status",
    )
    .fetch_all(pool)
    .await?;

    let by_status: Vec<StatusCount> = OrderStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: grouped
                .iter()
                .find(|c| c.status == status)
                .map_or(0, |c| c.count),
        })
        .collect();

    let totals = sqlx::query_scalar::<_, f64>("SELECT total_price_ghs FROM orders")
        .fetch_all(pool)
        .await?;

    Ok(OrderStats {
        total_orders: by_status.iter().map(|c| c.count).sum(),
        total_revenue: money::sum(totals),
        by_status,
    })
}
