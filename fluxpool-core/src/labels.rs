//! Fixed pool of identity labels attached to synthetic activity.

pub const IDENTITY_POOL: [&str; 21] = [
    "rugpullmaster.fluxpool.eth",
    "rektwizard.fluxpool.eth",
    "notyourkeys.fluxpool.eth",
    "vitalikbuterinbutnot.fluxpool.eth",
    "sushiswapfan.fluxpool.eth",
    "defi_dj.fluxpool.eth",
    "gwei_boi.fluxpool.eth",
    "hodlmybeer.fluxpool.eth",
    "ape4life.fluxpool.eth",
    "fomo.soon.fluxpool.eth",
    "paperhands.fluxpool.eth",
    "diamondhandz.fluxpool.eth",
    "gasguzzler.fluxpool.eth",
    "ponziplay.fluxpool.eth",
    "exitliquidity.fluxpool.eth",
    "safemoonbag.fluxpool.eth",
    "yolotrader.fluxpool.eth",
    "gmgn.fluxpool.eth",
    "to_the_moon.fluxpool.eth",
    "rektagain.fluxpool.eth",
    "whalealert.fluxpool.eth",
];

/// Curve pools cycled over the curve position table.
pub const CURVE_NAMES: [&str; 5] = ["Uniswap V3", "Curve.fi", "Balancer", "SushiSwap", "PancakeSwap"];
