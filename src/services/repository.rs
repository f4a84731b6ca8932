use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    error::{AppError, Result},
    models::repository::{AddRepositoryRequest, Repository, RepositoryStats},
    services::store::ResourceStore,
};

// 刷新策略: 单个仓库抓取比批量扫描更深
const SINGLE_REFRESH_INCREMENT: u32 = 5;
const BULK_REFRESH_INCREMENT: u32 = 3;

/// 漫画源仓库服务: 按创建顺序追加
#[derive(Clone)]
pub struct RepositoryService {
    store: Arc<ResourceStore<Repository>>,
}

impl RepositoryService {
    pub fn new() -> Self {
        // 计数器从 3 起步, 高于所有种子记录的 id
        Self {
            store: Arc::new(ResourceStore::new(sample_repositories(), 3)),
        }
    }

    /// 登记一个新仓库并追加到集合末尾
    pub fn add(&self, request: AddRepositoryRequest) -> Repository {
        let repository = Repository {
            id: self.store.next_id(),
            name: request.name,
            url: request.url,
            description: request.description,
            is_active: true,
            source_count: 0,
            last_updated: Utc::now(),
        };
        self.store.insert_back(repository.clone());

        info!("Added repository {}: {}", repository.id, repository.name);
        repository
    }

    /// 按创建顺序返回全部仓库
    pub fn list(&self) -> Vec<Repository> {
        self.store.list()
    }

    pub fn stats(&self) -> RepositoryStats {
        let repositories = self.store.list();
        RepositoryStats {
            total: repositories.len(),
            active: repositories.iter().filter(|r| r.is_active).count(),
        }
    }

    /// 刷新单个仓库, 无论其是否启用
    pub fn refresh_one(&self, id: &str) -> Result<()> {
        let updated = self.store.update_by_id(id, |repository| {
            repository.source_count += SINGLE_REFRESH_INCREMENT;
            repository.last_updated = Utc::now();
        });

        if updated {
            debug!("Refreshed repository {}", id);
            Ok(())
        } else {
            Err(AppError::not_found("المستودع غير موجود"))
        }
    }

    /// 刷新所有启用的仓库; 停用的仓库保持原样
    pub fn refresh_all(&self) {
        self.store.update_all(|repository| {
            if repository.is_active {
                repository.source_count += BULK_REFRESH_INCREMENT;
                repository.last_updated = Utc::now();
            }
        });
        debug!("Refreshed all active repositories");
    }

    /// 切换启用状态; 只有请求携带了该字段才写入并刷新时间戳
    pub fn set_active(&self, id: &str, is_active: Option<bool>) -> Result<()> {
        let updated = self.store.update_by_id(id, |repository| {
            if let Some(active) = is_active {
                repository.is_active = active;
                repository.last_updated = Utc::now();
            }
        });

        if updated {
            debug!("Updated repository {} (isActive: {:?})", id, is_active);
            Ok(())
        } else {
            Err(AppError::not_found("المستودع غير موجود"))
        }
    }

    /// 删除是幂等的: 不存在的 id 同样视为成功
    pub fn delete(&self, id: &str) {
        let removed = self.store.delete_by_id(id);
        debug!("Deleted repository {} (removed {})", id, removed);
    }

    #[cfg(test)]
    fn get(&self, id: &str) -> Repository {
        self.store.find_by_id(id).unwrap()
    }
}

fn sample_repositories() -> Vec<Repository> {
    vec![
        Repository {
            id: "1".to_string(),
            name: "مستودع المانجا الرئيسي".to_string(),
            url: "https://example.com/manga-repo".to_string(),
            description: "المستودع الرئيسي لمصادر المانجا".to_string(),
            is_active: true,
            source_count: 150,
            last_updated: Utc::now() - Duration::hours(6),
        },
        Repository {
            id: "2".to_string(),
            name: "مستودع المانجا الثانوي".to_string(),
            url: "https://example.com/manga-repo-2".to_string(),
            description: "مستودع إضافي للمصادر الجديدة".to_string(),
            is_active: false,
            source_count: 75,
            last_updated: Utc::now() - Duration::hours(12),
        },
    ]
}
