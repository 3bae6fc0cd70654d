//! Retained scene of rendered cells, diffed by identity key.
//!
//! Each update hands the scene the full next set of `(key, visual)` pairs.
//! Keys not seen before enter, keys no longer present exit, and keys present
//! in both update. The chart scripts join on the same keys, so a cell keeps
//! its DOM node across updates and can be transitioned.

use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation<V> {
    pub entered: Vec<(String, V)>,
    /// `(key, visual, changed)` for keys already in the scene
    pub updated: Vec<(String, V, bool)>,
    pub exited: Vec<String>,
}

impl<V> Reconciliation<V> {
    pub fn changed(&self) -> usize {
        self.updated.iter().filter(|(_, _, changed)| *changed).count()
    }

    /// True when applying this reconciliation would not alter anything.
    pub fn is_noop(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty() && self.changed() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene<V> {
    nodes: BTreeMap<String, V>,
}

impl<V> Default for Scene<V> {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }
}

impl<V: Clone + PartialEq> Scene<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.nodes.get(key)
    }

    /// Replace the scene with `next`, reporting what changed.
    ///
    /// Entered and updated entries keep the order of `next`; exited keys are
    /// in key order. Keys in `next` are expected to be unique.
    pub fn reconcile(&mut self, next: Vec<(String, V)>) -> Reconciliation<V> {
        let mut entered = Vec::new();
        let mut updated = Vec::new();
        let mut seen = BTreeSet::new();

        let mut nodes = BTreeMap::new();
        for (key, visual) in next {
            seen.insert(key.clone());
            match self.nodes.get(&key) {
                Some(previous) => {
                    let changed = *previous != visual;
                    updated.push((key.clone(), visual.clone(), changed));
                }
                None => entered.push((key.clone(), visual.clone())),
            }
            nodes.insert(key, visual);
        }

        let exited = self
            .nodes
            .keys()
            .filter(|k| !seen.contains(*k))
            .cloned()
            .collect();

        self.nodes = nodes;
        Reconciliation {
            entered,
            updated,
            exited,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, i32)]) -> Vec<(String, i32)> {
        items.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn first_reconcile_enters_everything() {
        let mut scene = Scene::new();
        let r = scene.reconcile(pairs(&[("2020-1", 1), ("2020-2", 2)]));
        assert_eq!(r.entered.len(), 2);
        assert!(r.updated.is_empty());
        assert!(r.exited.is_empty());
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn enter_update_exit() {
        let mut scene = Scene::new();
        scene.reconcile(pairs(&[("a", 1), ("b", 2), ("c", 3)]));
        let r = scene.reconcile(pairs(&[("b", 2), ("c", 30), ("d", 4)]));

        assert_eq!(r.entered, pairs(&[("d", 4)]));
        assert_eq!(
            r.updated,
            vec![("b".to_string(), 2, false), ("c".to_string(), 30, true)]
        );
        assert_eq!(r.exited, vec!["a".to_string()]);
        assert_eq!(r.changed(), 1);
        assert_eq!(scene.get("c"), Some(&30));
        assert_eq!(scene.get("a"), None);
    }

    #[test]
    fn identical_update_is_noop() {
        let mut scene = Scene::new();
        let next = pairs(&[("x", 5), ("y", 6)]);
        scene.reconcile(next.clone());
        let r = scene.reconcile(next);
        assert!(r.is_noop());
        assert_eq!(r.updated.len(), 2);
    }

    #[test]
    fn empty_next_exits_everything() {
        let mut scene = Scene::new();
        scene.reconcile(pairs(&[("x", 5)]));
        let r = scene.reconcile(Vec::new());
        assert_eq!(r.exited, vec!["x".to_string()]);
        assert!(scene.is_empty());
    }
}
