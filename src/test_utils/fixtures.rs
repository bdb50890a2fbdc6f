//! Test fixtures and common test data.
//!
//! Response bodies modelled on Tautulli's `get_activity` command.

/// Raw `get_activity` response bodies.
pub mod bodies {
    /// Every exported field present.
    pub const FULL_ACTIVITY: &str = r#"{
        "response": {
            "result": "success",
            "message": null,
            "data": {
                "lan_bandwidth": 20110,
                "sessions": [],
                "stream_count": 5,
                "stream_count_direct_play": 2,
                "stream_count_direct_stream": 1,
                "stream_count_transcode": 2,
                "total_bandwidth": 48213,
                "wan_bandwidth": 28103
            }
        }
    }"#;

    /// Only three fields present.
    pub const PARTIAL_ACTIVITY: &str =
        r#"{"response":{"data":{"stream_count":3,"stream_count_transcode":1,"total_bandwidth":50000}}}"#;

    /// Counters reported as strings, as some Tautulli versions do.
    pub const STRING_ACTIVITY: &str = r#"{"response":{"data":{"stream_count":"2","stream_count_transcode":"1","total_bandwidth":"9876"}}}"#;

    /// Explicit nulls next to one real value.
    pub const NULL_ACTIVITY: &str =
        r#"{"response":{"data":{"stream_count":null,"total_bandwidth":null,"wan_bandwidth":120}}}"#;

    /// An idle server.
    pub const IDLE_ACTIVITY: &str = r#"{"response":{"result":"success","data":{"stream_count":"0","stream_count_direct_play":0,"stream_count_direct_stream":0,"stream_count_transcode":0,"total_bandwidth":0,"lan_bandwidth":0,"wan_bandwidth":0,"sessions":[]}}}"#;

    /// Not JSON at all.
    pub const MALFORMED: &str = "<html><body>502 Bad Gateway</body></html>";
}

/// Builds a body where every activity field carries `value`.
pub fn uniform_activity(value: f64) -> String {
    format!(
        r#"{{"response":{{"data":{{"stream_count":{v},"stream_count_transcode":{v},"stream_count_direct_play":{v},"stream_count_direct_stream":{v},"total_bandwidth":{v},"lan_bandwidth":{v},"wan_bandwidth":{v}}}}}}}"#,
        v = value
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bodies_are_valid_json() {
        for body in [
            bodies::FULL_ACTIVITY,
            bodies::PARTIAL_ACTIVITY,
            bodies::STRING_ACTIVITY,
            bodies::NULL_ACTIVITY,
            bodies::IDLE_ACTIVITY,
        ] {
            assert!(serde_json::from_str::<serde_json::Value>(body).is_ok());
        }
        assert!(serde_json::from_str::<serde_json::Value>(bodies::MALFORMED).is_err());
    }

    #[test]
    fn test_uniform_activity() {
        let value: serde_json::Value = serde_json::from_str(&uniform_activity(7.0)).unwrap();
        assert_eq!(value["response"]["data"]["wan_bandwidth"], 7.0);
    }
}
