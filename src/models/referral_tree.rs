use {
    crate::{
        config::{DF, REFERRAL, ReferralConfig},
        domain::ReferralLevel,
    },
    serde::{Deserialize, Serialize},
};

/// Stable address of a node inside one [`ReferralTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: Self = Self(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferralNode {
    pub user_id: String,
    pub parent: Option<NodeId>,
    pub level: ReferralLevel,
    pub total_volume_usdt: f64,
    pub total_commission_usdt: f64,
    pub children: Vec<NodeId>,
}

/// Nested exchange form of a referral tree, as stored by dashboards and accepted from callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralUserNode {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default = "root_level")]
    pub level: u8,
    #[serde(rename = "totalVolumeUSDT", default)]
    pub total_volume_usdt: f64,
    #[serde(rename = "totalCommissionUSDT", default)]
    pub total_commission_usdt: f64,
    #[serde(default)]
    pub referrals: Vec<ReferralUserNode>,
}

fn root_level() -> u8 {
    ReferralLevel::ROOT.value()
}

impl ReferralUserNode {
    pub fn new(user_id: impl Into<String>, total_volume_usdt: f64, total_commission_usdt: f64) -> Self {
        Self {
            user_id: user_id.into(),
            parent_id: None,
            level: root_level(),
            total_volume_usdt,
            total_commission_usdt,
            referrals: Vec::new(),
        }
    }

    pub fn with_referrals(mut self, referrals: Vec<ReferralUserNode>) -> Self {
        self.referrals = referrals;
        self
    }
}

/// Result of [`ReferralTree::register_referral`]. Only the first two leave the tree changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered { node: NodeId, level: ReferralLevel },
    /// The tree was empty: a root was created for the parent with the new user under it.
    RootCreated { root: NodeId, node: NodeId },
    ParentNotFound,
    /// The parent already has `limit` direct referrals.
    CapExceeded { limit: usize },
    /// The new user id is already somewhere in the tree.
    AlreadyExists,
}

impl RegistrationOutcome {
    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered { .. } | Self::RootCreated { .. })
    }
}

/// Referral tree stored as an append-only arena.
///
/// Node 0 is the root. A child is always stored after its parent, so walking the arena
/// backwards visits every child before its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<ReferralUserNode>", into = "Option<ReferralUserNode>")]
pub struct ReferralTree {
    nodes: Vec<ReferralNode>,
    max_depth: u8,
}

impl ReferralTree {
    pub fn new() -> Self {
        Self::with_max_depth(REFERRAL.tree_max_depth)
    }

    pub fn with_max_depth(max_depth: u8) -> Self {
        Self {
            nodes: Vec::new(),
            max_depth,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId::ROOT)
    }

    pub fn node(&self, id: NodeId) -> Option<&ReferralNode> {
        self.nodes.get(id.0)
    }

    /// Nodes in arena order (every parent before its children).
    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = (NodeId, &ReferralNode)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Builds the arena from a nested tree, re-deriving levels from the structure.
    pub fn from_nested(root: &ReferralUserNode, max_depth: u8) -> Self {
        let mut tree = Self::with_max_depth(max_depth);
        let mut stack: Vec<(&ReferralUserNode, Option<NodeId>)> = vec![(root, None)];

        while let Some((n, parent)) = stack.pop() {
            let level = match parent {
                Some(p) => tree.nodes[p.0].level.child(max_depth),
                None => ReferralLevel::new(n.level, max_depth),
            };
            if DF.log_referral && level.value() != n.level {
                log::debug!("{}: level {} re-derived as {}", n.user_id, n.level, level);
            }
            let id = tree.push(ReferralNode {
                user_id: n.user_id.clone(),
                parent,
                level,
                total_volume_usdt: n.total_volume_usdt,
                total_commission_usdt: n.total_commission_usdt,
                children: Vec::new(),
            });
            // Reverse so siblings pop in their original order.
            stack.extend(n.referrals.iter().rev().map(|child| (child, Some(id))));
        }

        tree
    }

    pub fn to_nested(&self) -> Option<ReferralUserNode> {
        let mut built: Vec<Option<ReferralUserNode>> = vec![None; self.nodes.len()];

        for (id, node) in self.nodes().rev() {
            let referrals = node
                .children
                .iter()
                .filter_map(|c| built[c.0].take())
                .collect();
            built[id.0] = Some(ReferralUserNode {
                user_id: node.user_id.clone(),
                parent_id: node.parent.map(|p| self.nodes[p.0].user_id.clone()),
                level: node.level.value(),
                total_volume_usdt: node.total_volume_usdt,
                total_commission_usdt: node.total_commission_usdt,
                referrals,
            });
        }

        built.into_iter().next().flatten()
    }

    /// Depth-first (pre-order) search for `user_id`; the first match wins.
    pub fn find(&self, user_id: &str) -> Option<NodeId> {
        let mut stack = vec![self.root()?];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            if node.user_id == user_id {
                return Some(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    fn push(&mut self, node: ReferralNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let Some(parent) = node.parent {
            self.nodes[parent.0].children.push(id);
        }
        self.nodes.push(node);
        id
    }

    fn new_member(user_id: &str, parent: Option<NodeId>, level: ReferralLevel) -> ReferralNode {
        ReferralNode {
            user_id: user_id.to_owned(),
            parent,
            level,
            total_volume_usdt: 0.0,
            total_commission_usdt: 0.0,
            children: Vec::new(),
        }
    }

    /// Adds `child_id` under `parent_id` using the static programme limits.
    pub fn register_referral(&mut self, parent_id: &str, child_id: &str) -> RegistrationOutcome {
        self.register_with(parent_id, child_id, &REFERRAL)
    }

    /// Adds a zero-volume `child_id` under the first node found for `parent_id`.
    ///
    /// The tree is only modified when the outcome is a registration.
    pub fn register_with(
        &mut self,
        parent_id: &str,
        child_id: &str,
        config: &ReferralConfig,
    ) -> RegistrationOutcome {
        let outcome = self.try_register(parent_id, child_id, config.limits.max_invites_per_day);
        if DF.log_referral {
            log::info!("Referral {} -> {}: {:?}", parent_id, child_id, outcome);
        }
        outcome
    }

    fn try_register(&mut self, parent_id: &str, child_id: &str, cap: usize) -> RegistrationOutcome {
        if parent_id == child_id || self.find(child_id).is_some() {
            return RegistrationOutcome::AlreadyExists;
        }

        if self.is_empty() {
            if cap == 0 {
                return RegistrationOutcome::CapExceeded { limit: cap };
            }
            let root = self.push(Self::new_member(parent_id, None, ReferralLevel::ROOT));
            let level = ReferralLevel::ROOT.child(self.max_depth);
            let node = self.push(Self::new_member(child_id, Some(root), level));
            return RegistrationOutcome::RootCreated { root, node };
        }

        let Some(parent) = self.find(parent_id) else {
            return RegistrationOutcome::ParentNotFound;
        };

        if self.nodes[parent.0].children.len() >= cap {
            return RegistrationOutcome::CapExceeded { limit: cap };
        }

        let level = self.nodes[parent.0].level.child(self.max_depth);
        let node = self.push(Self::new_member(child_id, Some(parent), level));
        RegistrationOutcome::Registered { node, level }
    }
}

impl Default for ReferralTree {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Option<ReferralUserNode>> for ReferralTree {
    fn from(root: Option<ReferralUserNode>) -> Self {
        match root {
            Some(r) => Self::from_nested(&r, REFERRAL.tree_max_depth),
            None => Self::new(),
        }
    }
}

impl From<ReferralTree> for Option<ReferralUserNode> {
    fn from(tree: ReferralTree) -> Self {
        tree.to_nested()
    }
}
