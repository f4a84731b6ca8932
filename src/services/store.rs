use parking_lot::RwLock;

/// 以字符串 id 为主键的记录
pub trait Resource {
    fn id(&self) -> &str;
}

/// 有序的内存记录集合, 自带单调递增的 id 计数器。
///
/// 每个操作只获取一次锁, 因此紧跟在变更之后的读取总能看到该变更。
pub struct ResourceStore<T> {
    inner: RwLock<StoreInner<T>>,
}

struct StoreInner<T> {
    records: Vec<T>,
    next_id: u64,
}

impl<T: Resource + Clone> ResourceStore<T> {
    /// 用种子数据创建集合; `next_id` 必须大于所有种子记录的 id
    pub fn new(seed: Vec<T>, next_id: u64) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                records: seed,
                next_id,
            }),
        }
    }

    /// 分配下一个 id, 十进制字符串形式; 计数器只增不减
    pub fn next_id(&self) -> String {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        id.to_string()
    }

    pub fn insert_front(&self, record: T) {
        self.inner.write().records.insert(0, record);
    }

    pub fn insert_back(&self, record: T) {
        self.inner.write().records.push(record);
    }

    pub fn find_by_id(&self, id: &str) -> Option<T> {
        self.inner
            .read()
            .records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    /// 对匹配 id 的记录原地应用 `mutate`; 返回是否找到
    pub fn update_by_id(&self, id: &str, mutate: impl FnOnce(&mut T)) -> bool {
        let mut inner = self.inner.write();
        match inner.records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                mutate(record);
                true
            }
            None => false,
        }
    }

    /// 在一次写锁内对所有记录应用 `mutate`
    pub fn update_all(&self, mut mutate: impl FnMut(&mut T)) {
        let mut inner = self.inner.write();
        for record in inner.records.iter_mut() {
            mutate(record);
        }
    }

    /// 删除匹配 id 的记录, 返回删除数量; 其余记录相对顺序不变
    pub fn delete_by_id(&self, id: &str) -> usize {
        let mut inner = self.inner.write();
        let before = inner.records.len();
        inner.records.retain(|record| record.id() != id);
        before - inner.records.len()
    }

    /// 当前顺序的快照
    pub fn list(&self) -> Vec<T> {
        self.inner.read().records.clone()
    }
}
