//! 用户内存存储

use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

use super::model::User;

/// 启动时写入的示例用户
const SEED_USERS: [(&str, i32); 3] = [("Tom", 37), ("Bob", 41), ("Sam", 24)];

/// 进程内唯一的用户集合
///
/// 所有操作都在同一把互斥锁内完成，锁只在单次操作期间持有。
/// 记录保持插入顺序，查找为线性扫描。
#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 包含 Tom、Bob、Sam 三个示例用户的存储
    pub fn seeded() -> Self {
        let store = Self::new();
        for (name, age) in SEED_USERS {
            store.insert(name.to_string(), age);
        }
        store
    }

    // 记录都是普通值，中毒的锁不会留下半完成的修改
    fn lock(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<User> {
        self.lock().clone()
    }

    pub fn find_by_id(&self, id: &str) -> Option<User> {
        self.lock().iter().find(|user| user.id == id).cloned()
    }

    /// 分配新 id 并追加到末尾
    pub fn insert(&self, name: String, age: i32) -> User {
        let mut users = self.lock();
        let user = User {
            id: fresh_id(&users),
            name,
            age,
        };
        users.push(user.clone());
        user
    }

    /// 原地修改 name 和 age，id 不变
    pub fn update(&self, id: &str, name: String, age: i32) -> Option<User> {
        let mut users = self.lock();
        let user = users.iter_mut().find(|user| user.id == id)?;
        user.name = name;
        user.age = age;
        Some(user.clone())
    }

    pub fn remove(&self, id: &str) -> Option<User> {
        let mut users = self.lock();
        let index = users.iter().position(|user| user.id == id)?;
        Some(users.remove(index))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

fn fresh_id(users: &[User]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !users.iter().any(|user| user.id == id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn names(store: &UserStore) -> Vec<String> {
        store.list().into_iter().map(|user| user.name).collect()
    }

    #[test]
    fn seeded_store_holds_demo_users_in_order() {
        let store = UserStore::seeded();
        assert_eq!(names(&store), ["Tom", "Bob", "Sam"]);
        let ages: Vec<i32> = store.list().iter().map(|user| user.age).collect();
        assert_eq!(ages, [37, 41, 24]);

        let ids: HashSet<String> = store.list().into_iter().map(|user| user.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.iter().all(|id| Uuid::parse_str(id).is_ok()));
    }

    #[test]
    fn insert_appends_with_fresh_id() {
        let store = UserStore::seeded();
        let existing: Vec<String> = store.list().into_iter().map(|user| user.id).collect();

        let user = store.insert("Ann".to_string(), 30);
        assert!(!user.id.is_empty());
        assert!(!existing.contains(&user.id));
        assert_eq!(store.len(), 4);
        assert_eq!(store.list().last(), Some(&user));
        assert_eq!(store.find_by_id(&user.id), Some(user));
    }

    #[test]
    fn insert_accepts_any_age_and_name() {
        let store = UserStore::new();
        assert!(store.is_empty());
        let user = store.insert(String::new(), -5);
        assert_eq!(user.name, "");
        assert_eq!(user.age, -5);
    }

    #[test]
    fn update_keeps_id_and_position() {
        let store = UserStore::seeded();
        let bob = store.list()[1].clone();

        let updated = store.update(&bob.id, "Robert".to_string(), 42).unwrap();
        assert_eq!(updated.id, bob.id);
        assert_eq!(updated.name, "Robert");
        assert_eq!(updated.age, 42);
        assert_eq!(names(&store), ["Tom", "Robert", "Sam"]);
    }

    #[test]
    fn update_unknown_id_changes_nothing() {
        let store = UserStore::seeded();
        let before = store.list();
        assert!(store.update("missing", "X".to_string(), 1).is_none());
        assert_eq!(store.list(), before);
    }

    #[test]
    fn remove_returns_record_and_shifts_order() {
        let store = UserStore::seeded();
        let tom = store.list()[0].clone();

        assert_eq!(store.remove(&tom.id), Some(tom.clone()));
        assert_eq!(names(&store), ["Bob", "Sam"]);
        assert!(store.find_by_id(&tom.id).is_none());
        assert!(store.remove(&tom.id).is_none());
    }

    #[test]
    fn lookup_is_exact_string_match() {
        let user = User {
            id: "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee".to_string(),
            name: "Ann".to_string(),
            age: 30,
        };
        let store = UserStore {
            users: Mutex::new(vec![user.clone()]),
        };
        assert_eq!(store.find_by_id(&user.id), Some(user));
        assert!(store.find_by_id("AAAAAAAA-BBBB-CCCC-DDDD-EEEEEEEEEEEE").is_none());
    }

    #[test]
    fn concurrent_inserts_are_not_lost() {
        let store = Arc::new(UserStore::new());
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..50 {
                        store.insert(format!("user-{worker}-{i}"), i);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 400);
        let ids: HashSet<String> = store.list().into_iter().map(|user| user.id).collect();
        assert_eq!(ids.len(), 400);
    }
}
