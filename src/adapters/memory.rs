use crate::domain::model::{is_primary_key_valid, Page, Person};
use crate::domain::ports::Repository;
use crate::utils::error::{ConvertError, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i32, Person>,
    last_person_id: i32,
    last_address_id: i32,
}

/// Process-local person store. Stamps audit columns and enforces
/// optimistic locking the way a JPA repository would.
#[derive(Debug)]
pub struct InMemoryPersonRepository {
    table: RwLock<Table>,
    audit_user: String,
}

impl InMemoryPersonRepository {
    pub fn new(audit_user: &str) -> Self {
        Self {
            table: RwLock::new(Table::default()),
            audit_user: audit_user.to_string(),
        }
    }

    pub async fn count(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

fn sorted(rows: &BTreeMap<i32, Person>) -> Vec<Person> {
    let mut people: Vec<Person> = rows.values().cloned().collect();
    people.sort_by(|a, b| {
        a.last_name
            .cmp(&b.last_name)
            .then_with(|| a.first_name.cmp(&b.first_name))
    });
    people
}

#[async_trait]
impl Repository for InMemoryPersonRepository {
    async fn find_one(&self, id: i32) -> Result<Option<Person>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Person>> {
        Ok(sorted(&self.table.read().await.rows))
    }

    async fn find_page(&self, page: usize, page_size: usize) -> Result<Page<Person>> {
        let table = self.table.read().await;
        let content = sorted(&table.rows)
            .into_iter()
            .skip(page.saturating_mul(page_size))
            .take(page_size)
            .collect();

        Ok(Page {
            content,
            total_elements: table.rows.len() as u64,
        })
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Person>> {
        let table = self.table.read().await;
        Ok(sorted(&table.rows)
            .into_iter()
            .filter(|person| person.last_name == last_name)
            .collect())
    }

    async fn save_and_flush(&self, mut person: Person) -> Result<Person> {
        let mut table = self.table.write().await;
        let now = Utc::now();

        match person.id {
            Some(id) if id > 0 => {
                let existing = table.rows.get(&id).ok_or_else(|| {
                    ConvertError::validation(format!("No person found with id {}", id))
                })?;
                if existing.lock_version != person.lock_version {
                    return Err(ConvertError::OptimisticLock {
                        id,
                        expected: person.lock_version,
                        actual: existing.lock_version,
                    });
                }
                person.audit.created_by = existing.audit.created_by.clone();
                person.audit.created = existing.audit.created;
                person.lock_version += 1;
            }
            _ => {
                table.last_person_id += 1;
                person.id = Some(table.last_person_id);
                person.audit.created_by = Some(self.audit_user.clone());
                person.audit.created = Some(now);
                person.lock_version = 0;
            }
        }
        person.audit.last_modified_by = Some(self.audit_user.clone());
        person.audit.last_modified = Some(now);

        for address in &mut person.addresses {
            if !is_primary_key_valid(address.id) {
                table.last_address_id += 1;
                address.id = Some(table.last_address_id);
            }
        }

        if let Some(id) = person.id {
            table.rows.insert(id, person.clone());
            tracing::debug!("Saved person {} (lock version {})", id, person.lock_version);
        }
        Ok(person)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut table = self.table.write().await;
        match table.rows.remove(&id) {
            Some(_) => {
                tracing::debug!("Deleted person {}", id);
                Ok(())
            }
            None => Err(ConvertError::validation(format!(
                "No person found with id {}",
                id
            ))),
        }
    }
}
