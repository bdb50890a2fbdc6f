use std::fmt;

/// Namespace prefix shared by every exported metric.
pub const NAMESPACE: &str = "tautulli";

/// The activity values exported as gauges.
///
/// Each variant ties a key of Tautulli's `get_activity` payload to the
/// metric it is published as.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ActivityField {
    /// All current streams
    StreamCount,
    /// Streams being transcoded
    StreamCountTranscode,
    /// Streams played directly
    StreamCountDirectPlay,
    /// Streams remuxed without transcoding
    StreamCountDirectStream,
    /// Total bandwidth in use
    TotalBandwidth,
    /// Bandwidth used by local clients
    LanBandwidth,
    /// Bandwidth used by remote clients
    WanBandwidth,
}

impl ActivityField {
    /// Every field, in exposition order.
    pub const ALL: [ActivityField; 7] = [
        ActivityField::StreamCount,
        ActivityField::StreamCountTranscode,
        ActivityField::StreamCountDirectPlay,
        ActivityField::StreamCountDirectStream,
        ActivityField::TotalBandwidth,
        ActivityField::LanBandwidth,
        ActivityField::WanBandwidth,
    ];

    /// Key of the field inside `response.data`.
    pub fn json_key(&self) -> &'static str {
        match self {
            ActivityField::StreamCount => "stream_count",
            ActivityField::StreamCountTranscode => "stream_count_transcode",
            ActivityField::StreamCountDirectPlay => "stream_count_direct_play",
            ActivityField::StreamCountDirectStream => "stream_count_direct_stream",
            ActivityField::TotalBandwidth => "total_bandwidth",
            ActivityField::LanBandwidth => "lan_bandwidth",
            ActivityField::WanBandwidth => "wan_bandwidth",
        }
    }

    /// Metric name without the namespace prefix.
    pub fn metric_name(&self) -> &'static str {
        match self {
            ActivityField::StreamCount => "stream_count",
            ActivityField::StreamCountTranscode => "stream_count_transcode",
            ActivityField::StreamCountDirectPlay => "stream_direct_play",
            ActivityField::StreamCountDirectStream => "stream_direct_stream",
            ActivityField::TotalBandwidth => "bandwidth_total",
            ActivityField::LanBandwidth => "bandwidth_lan",
            ActivityField::WanBandwidth => "bandwidth_wan",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            ActivityField::StreamCount => "Number of total streams.",
            ActivityField::StreamCountTranscode => "Number of streams that are transcoding.",
            ActivityField::StreamCountDirectPlay => "Number of streams that are direct_plays.",
            ActivityField::StreamCountDirectStream => "Number of streams that are direct streams.",
            ActivityField::TotalBandwidth => "Total bandwidth utilized.",
            ActivityField::LanBandwidth => "LAN bandwidth utilized.",
            ActivityField::WanBandwidth => "WAN bandwidth utilized.",
        }
    }

    /// Fully qualified metric name, e.g. `tautulli_bandwidth_lan`.
    pub fn fq_name(&self) -> String {
        format!("{}_{}", NAMESPACE, self.metric_name())
    }
}

impl fmt::Display for ActivityField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.json_key())
    }
}
