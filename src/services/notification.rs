use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::debug;

use crate::{
    models::notification::{Notification, NotificationStats, SendNotificationRequest},
    services::store::ResourceStore,
};

/// 通知服务: 最新的通知排在最前
#[derive(Clone)]
pub struct NotificationService {
    store: Arc<ResourceStore<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        // 计数器从 3 起步, 高于所有种子记录的 id
        Self {
            store: Arc::new(ResourceStore::new(sample_notifications(), 3)),
        }
    }

    /// 构建并登记一条新通知, 插入到集合最前面。
    /// 本系统没有草稿状态, 通知创建即已发送。
    pub fn send(&self, request: SendNotificationRequest) -> Notification {
        let notification = Notification {
            id: self.store.next_id(),
            title: request.title,
            body: request.body,
            kind: request.kind,
            priority: request.priority,
            created_at: Utc::now(),
            sent: true,
        };
        self.store.insert_front(notification.clone());

        debug!("Sent notification {}: {}", notification.id, notification.title);
        notification
    }

    /// 按最近优先的顺序返回全部通知
    pub fn list(&self) -> Vec<Notification> {
        self.store.list()
    }

    pub fn stats(&self) -> NotificationStats {
        let notifications = self.store.list();
        NotificationStats {
            total: notifications.len(),
            sent: notifications.iter().filter(|n| n.sent).count(),
        }
    }

    /// 删除是幂等的: 不存在的 id 同样视为成功
    pub fn delete(&self, id: &str) {
        let removed = self.store.delete_by_id(id);
        debug!("Deleted notification {} (removed {})", id, removed);
    }
}

fn sample_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            title: "مرحباً بك في لوحة التحكم".to_string(),
            body: "تم تفعيل لوحة التحكم بنجاح. يمكنك الآن إدارة الإشعارات والمستودعات."
                .to_string(),
            kind: "general".to_string(),
            priority: "medium".to_string(),
            created_at: Utc::now() - Duration::hours(2),
            sent: true,
        },
        Notification {
            id: "2".to_string(),
            title: "تحديث النظام".to_string(),
            body: "تم تحديث النظام إلى الإصدار الجديد مع تحسينات في الأداء.".to_string(),
            kind: "update".to_string(),
            priority: "high".to_string(),
            created_at: Utc::now() - Duration::hours(24),
            sent: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send_titled(service: &NotificationService, title: &str) -> Notification {
        service.send(SendNotificationRequest {
            title: title.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn fresh_service_has_seeded_notifications() {
        let service = NotificationService::new();
        let notifications = service.list();
        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0].id, "1");
        assert_eq!(notifications[1].id, "2");
        assert!(notifications.iter().all(|n| n.sent));
    }

    #[test]
    fn send_inserts_at_front_with_fresh_ids() {
        let service = NotificationService::new();
        let first = send_titled(&service, "A");
        let second = send_titled(&service, "B");
        assert_eq!(first.id, "3");
        assert_eq!(second.id, "4");

        let titles: Vec<_> = service.list().into_iter().map(|n| n.title).collect();
        assert_eq!(&titles[..2], &["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn send_applies_defaults_and_marks_sent() {
        let service = NotificationService::new();
        let notification = service.send(SendNotificationRequest::default());
        assert_eq!(notification.title, "");
        assert_eq!(notification.body, "");
        assert_eq!(notification.kind, "general");
        assert_eq!(notification.priority, "medium");
        assert!(notification.sent);
    }

    #[test]
    fn stats_track_total_and_sent() {
        let service = NotificationService::new();
        send_titled(&service, "A");

        let stats = service.stats();
        assert_eq!(stats.total, service.list().len());
        assert_eq!(stats.sent, stats.total);
    }

    #[test]
    fn delete_is_idempotent_and_removes_exactly_one() {
        let service = NotificationService::new();
        let before = service.list().len();

        service.delete("1");
        assert_eq!(service.list().len(), before - 1);
        assert!(service.list().iter().all(|n| n.id != "1"));

        // 再删同一个 id 不报错也不再变化
        service.delete("1");
        service.delete("no-such-id");
        assert_eq!(service.list().len(), before - 1);
    }
}
