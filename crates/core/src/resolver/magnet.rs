//! Magnet URI construction.

/// Announce trackers appended to every magnet, in this order.
pub const TRACKERS: &[&str] = &[
    "udp://tracker.opentrackr.org:1337/announce",
    "udp://open.stealth.si:80/announce",
    "udp://tracker.torrent.eu.org:451/announce",
    "udp://exodus.desync.com:6969/announce",
    "udp://tracker.openbittorrent.com:6969/announce",
    "udp://open.demonii.com:1337/announce",
    "udp://tracker.moeking.me:6969/announce",
    "udp://explodie.org:6969/announce",
];

/// Build a magnet URI: content hash, percent-encoded display name, then one
/// `tr` parameter per entry of [`TRACKERS`].
pub fn build_magnet(info_hash: &str, display_name: &str) -> String {
    let mut uri = format!(
        "magnet:?xt=urn:btih:{}&dn={}",
        info_hash,
        urlencoding::encode(display_name)
    );

    for tracker in TRACKERS {
        uri.push_str("&tr=");
        uri.push_str(&urlencoding::encode(tracker));
    }

    uri
}
