use super::types::ActivityField;

/// Aggregate activity read from one `get_activity` response.
///
/// Lives only for the duration of a scrape. Fields missing from the
/// response are 0.0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Activity {
    pub stream_count: f64,
    pub stream_count_transcode: f64,
    pub stream_count_direct_play: f64,
    pub stream_count_direct_stream: f64,
    pub total_bandwidth: f64,
    pub lan_bandwidth: f64,
    pub wan_bandwidth: f64,
}

impl Activity {
    pub fn get(&self, field: ActivityField) -> f64 {
        match field {
            ActivityField::StreamCount => self.stream_count,
            ActivityField::StreamCountTranscode => self.stream_count_transcode,
            ActivityField::StreamCountDirectPlay => self.stream_count_direct_play,
            ActivityField::StreamCountDirectStream => self.stream_count_direct_stream,
            ActivityField::TotalBandwidth => self.total_bandwidth,
            ActivityField::LanBandwidth => self.lan_bandwidth,
            ActivityField::WanBandwidth => self.wan_bandwidth,
        }
    }

    pub fn set(&mut self, field: ActivityField, value: f64) {
        let slot = match field {
            ActivityField::StreamCount => &mut self.stream_count,
            ActivityField::StreamCountTranscode => &mut self.stream_count_transcode,
            ActivityField::StreamCountDirectPlay => &mut self.stream_count_direct_play,
            ActivityField::StreamCountDirectStream => &mut self.stream_count_direct_stream,
            ActivityField::TotalBandwidth => &mut self.total_bandwidth,
            ActivityField::LanBandwidth => &mut self.lan_bandwidth,
            ActivityField::WanBandwidth => &mut self.wan_bandwidth,
        };
        *slot = value;
    }
}
