//! Tests for service error mapping.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::db::DbError;
use crate::service::ServiceError;

#[test]
fn not_found_displays_fixed_message() {
    let err = ServiceError::NotFound { id: 3 };
    assert_eq!(err.to_string(), "Todo not found");
}

#[test]
fn missing_field_names_the_field() {
    let err = ServiceError::missing_field("content");
    assert_eq!(err.to_string(), "content: field required");
    assert!(matches!(err, ServiceError::Validation { .. }));
}

#[test]
fn db_not_found_maps_to_not_found_with_id() {
    let err: ServiceError = DbError::todo_not_found(12).into();
    match err {
        ServiceError::NotFound { id } => assert_eq!(id, 12),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn db_connection_error_maps_to_store_unavailable() {
    let err: ServiceError = DbError::Connection {
        message: "pool closed".to_string(),
    }
    .into();
    match err {
        ServiceError::StoreUnavailable { message } => assert!(message.contains("pool closed")),
        other => panic!("Expected StoreUnavailable, got {:?}", other),
    }
}

#[test]
fn db_query_error_maps_to_store_unavailable() {
    let err: ServiceError = DbError::Database {
        message: "no such table: todos".to_string(),
    }
    .into();
    assert!(matches!(err, ServiceError::StoreUnavailable { .. }));
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn convert_with_logs(err: DbError) -> (ServiceError, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let converted = tracing::subscriber::with_default(subscriber, || ServiceError::from(err));
    (converted, logs.contents())
}

#[test]
fn db_not_found_with_unparseable_id_is_logged_as_store_failure() {
    let (err, logs) = convert_with_logs(DbError::NotFound {
        entity_type: "Todo".to_string(),
        id: "abc".to_string(),
    });

    assert!(matches!(err, ServiceError::StoreUnavailable { .. }));
    assert!(logs.contains("Store operation failed"), "logs: {logs}");
    assert!(logs.contains("abc"), "logs: {logs}");
}

#[test]
fn db_connection_error_is_logged() {
    let (err, logs) = convert_with_logs(DbError::Connection {
        message: "unable to open database file".to_string(),
    });

    assert!(matches!(err, ServiceError::StoreUnavailable { .. }));
    assert!(logs.contains("Store operation failed"), "logs: {logs}");
    assert!(logs.contains("unable to open database file"), "logs: {logs}");
}

#[test]
fn db_not_found_with_numeric_id_is_not_logged() {
    let (err, logs) = convert_with_logs(DbError::todo_not_found(9));

    assert!(matches!(err, ServiceError::NotFound { id: 9 }));
    assert!(logs.is_empty(), "logs: {logs}");
}
