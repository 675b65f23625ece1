//! # Shard-Count Derivation
//!
//! ```text
//! hyst_meta  = floor(meta_chain_min_nodes * hysteresis)
//! hyst_shard = floor(min_nodes_per_shard  * hysteresis)
//! shards     = (nodes - meta_nodes - hyst_meta) / (min_nodes_per_shard + hyst_shard)
//! ```
//!
//! A negative numerator or a zero denominator yields zero shards.

/// Extra capacity implied by hysteresis on top of `min_nodes`.
///
/// Computed in `f32` and truncated; negative or NaN hysteresis gives 0.
pub fn hysteresis_extra(min_nodes: u32, hysteresis: f32) -> u32 {
    (min_nodes as f32 * hysteresis) as u32
}

/// Number of regular shards for the decoded validator set.
pub fn compute_shard_count(
    nr_of_nodes: u32,
    nr_of_meta_chain_nodes: u32,
    meta_chain_min_nodes: u32,
    min_nodes_per_shard: u32,
    hysteresis: f32,
) -> u32 {
    let hyst_meta = hysteresis_extra(meta_chain_min_nodes, hysteresis);
    let hyst_shard = hysteresis_extra(min_nodes_per_shard, hysteresis);

    let available = nr_of_nodes
        .saturating_sub(nr_of_meta_chain_nodes)
        .saturating_sub(hyst_meta);
    let per_shard = min_nodes_per_shard.saturating_add(hyst_shard);

    available.checked_div(per_shard).unwrap_or(0)
}
