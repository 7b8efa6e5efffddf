//! Referral tree aggregation and rank resolution.

use {
    crate::{
        config::{DF, REFERRAL, RankFallback, ReferralConfig, ReferralRank},
        domain::ReferralLevel,
        models::ReferralTree,
    },
    itertools::Itertools,
    serde::Serialize,
};

/// Sums for one subtree, before any rank boost.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SubtreeTotals {
    /// Every descendant below the subtree root.
    pub referrals: u64,
    pub volume_usdt: f64,
    pub commission_usdt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferralStats {
    pub total_referrals: u64,
    pub total_volume_usdt: f64,
    /// Summed commission times `rank.commission_boost`.
    pub total_earnings_usdt: f64,
    pub rank: ReferralRank,
}

impl ReferralStats {
    /// True when the totals meet `rank`'s thresholds, false when the fallback policy chose it.
    pub fn rank_earned(&self) -> bool {
        meets(&self.rank, self.total_referrals, self.total_volume_usdt)
    }
}

fn meets(rank: &ReferralRank, referrals: u64, volume_usdt: f64) -> bool {
    referrals >= u64::from(rank.min_referrals) && volume_usdt >= rank.min_volume_usdt
}

/// Totals for every node, indexed by `NodeId::index()`.
///
/// Post-order fold: the arena stores children after their parents, so a reverse walk sees
/// each child's finished totals before its parent needs them.
pub fn subtree_totals(tree: &ReferralTree) -> Vec<SubtreeTotals> {
    let mut totals = vec![SubtreeTotals::default(); tree.len()];

    for (id, node) in tree.nodes().rev() {
        let mut acc = SubtreeTotals {
            referrals: node.children.len() as u64,
            volume_usdt: node.total_volume_usdt,
            commission_usdt: node.total_commission_usdt,
        };
        for child in &node.children {
            let sub = totals[child.index()];
            acc.referrals += sub.referrals;
            acc.volume_usdt += sub.volume_usdt;
            acc.commission_usdt += sub.commission_usdt;
        }
        totals[id.index()] = acc;
    }

    totals
}

/// Highest-volume rank whose referral and volume thresholds are both met.
///
/// When nothing qualifies, `config.rank_fallback` picks the answer. `None` only for an empty
/// ladder.
pub fn compute_rank_with(
    referrals: u64,
    volume_usdt: f64,
    config: &ReferralConfig,
) -> Option<&'static ReferralRank> {
    let by_volume_desc: Vec<&'static ReferralRank> = config
        .ranks
        .iter()
        .sorted_by(|a, b| b.min_volume_usdt.total_cmp(&a.min_volume_usdt))
        .collect();

    by_volume_desc
        .iter()
        .find(|r| meets(r, referrals, volume_usdt))
        .or(match config.rank_fallback {
            RankFallback::Lowest => by_volume_desc.last(),
            RankFallback::Highest => by_volume_desc.first(),
        })
        .copied()
}

pub fn compute_rank(referrals: u64, volume_usdt: f64) -> Option<&'static ReferralRank> {
    compute_rank_with(referrals, volume_usdt, &REFERRAL)
}

/// Share of `trade_fee_usdt` paid for a trade made `level` steps below the referrer.
pub fn compute_commission_with(
    trade_fee_usdt: f64,
    level: ReferralLevel,
    config: &ReferralConfig,
) -> f64 {
    config
        .commission_for(level.value())
        .map_or(0.0, |rule| trade_fee_usdt * rule.percent / 100.0)
}

pub fn compute_commission(trade_fee_usdt: f64, level: ReferralLevel) -> f64 {
    compute_commission_with(trade_fee_usdt, level, &REFERRAL)
}

/// Whole-tree statistics. `None` for an empty tree.
pub fn aggregate_with(tree: &ReferralTree, config: &ReferralConfig) -> Option<ReferralStats> {
    let root = tree.root()?;
    let totals = subtree_totals(tree)[root.index()];
    let rank = *compute_rank_with(totals.referrals, totals.volume_usdt, config)?;

    if DF.log_referral {
        log::debug!(
            "Tree of {} nodes: {} referrals, {:.2} USDT volume -> {}",
            tree.len(),
            totals.referrals,
            totals.volume_usdt,
            rank.id
        );
    }

    Some(ReferralStats {
        total_referrals: totals.referrals,
        total_volume_usdt: totals.volume_usdt,
        total_earnings_usdt: totals.commission_usdt * rank.commission_boost,
        rank,
    })
}

pub fn aggregate(tree: &ReferralTree) -> Option<ReferralStats> {
    aggregate_with(tree, &REFERRAL)
}
