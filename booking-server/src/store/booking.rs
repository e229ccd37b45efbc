/// Booking store: create, list by phone, cancel.
/// Bookings are keyed by a generated reference plus the customer phone.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub booking_reference: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub from_district: String,
    pub to_district: String,
    pub dropping_point: String,
    pub bus_provider: String,
    pub travel_date: String,
    pub fare: i64,
    pub status: String,
    pub created_at: String,
}

/// 8-character uppercase alphanumeric booking reference.
pub fn generate_reference() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string().to_uppercase();
    id[..8].to_string()
}

fn from_row(row: &SqliteRow) -> Result<Booking, sqlx::Error> {
    Ok(Booking {
        id: row.try_get("id")?,
        booking_reference: row.try_get("booking_reference")?,
        customer_name: row.try_get("customer_name")?,
        customer_phone: row.try_get("customer_phone")?,
        from_district: row.try_get("from_district")?,
        to_district: row.try_get("to_district")?,
        dropping_point: row.try_get("dropping_point")?,
        bus_provider: row.try_get("bus_provider")?,
        travel_date: row.try_get("travel_date")?,
        fare: row.try_get("fare")?,
        status: row.try_get("status")?,
        created_at: row.try_get("created_at")?,
    })
}

#[derive(Clone)]
pub struct BookingStore {
    pool: SqlitePool,
}

pub struct NewBooking {
    pub customer_name: String,
    pub customer_phone: String,
    pub from_district: String,
    pub to_district: String,
    pub dropping_point: String,
    pub bus_provider: String,
    pub travel_date: String,
    pub fare: i64,
}

impl BookingStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a confirmed booking and return its generated reference.
    pub async fn create(&self, booking: &NewBooking) -> Result<String, sqlx::Error> {
        let reference = generate_reference();
        sqlx::query(
            "INSERT INTO bookings
             (booking_reference, customer_name, customer_phone, from_district,
              to_district, dropping_point, bus_provider, travel_date, fare, status)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, 'confirmed')",
        )
        .bind(&reference)
        .bind(&booking.customer_name)
        .bind(&booking.customer_phone)
        .bind(&booking.from_district)
        .bind(&booking.to_district)
        .bind(&booking.dropping_point)
        .bind(&booking.bus_provider)
        .bind(&booking.travel_date)
        .bind(booking.fare)
        .execute(&self.pool)
        .await?;
        Ok(reference)
    }

    pub async fn get_by_phone(&self, phone: &str) -> Result<Vec<Booking>, sqlx::Error> {
        let rows = sqlx::query(
            "SELECT * FROM bookings WHERE customer_phone = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(phone)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(from_row).collect()
    }

    pub async fn get_by_reference_and_phone(
        &self,
        reference: &str,
        phone: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let row = sqlx::query(
            "SELECT * FROM bookings WHERE booking_reference = ? AND customer_phone = ?",
        )
        .bind(reference)
        .bind(phone)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(from_row).transpose()
    }

    /// Mark a booking cancelled. Returns whether a row was affected.
    pub async fn cancel(&self, reference: &str, phone: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE bookings SET status = 'cancelled'
             WHERE booking_reference = ? AND customer_phone = ?",
        )
        .bind(reference)
        .bind(phone)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
