use swarm_data::DistanceHistogram;

const BAR_WIDTH: usize = 40;

/// Text rendering of the agent-to-target distance histogram.
pub fn format_histogram(histogram: &DistanceHistogram) -> String {
    let peak = histogram.counts.iter().copied().max().unwrap_or(0);
    let mut out = String::from("Agent-to-target distance distribution\n");
    for (lower, upper, count) in histogram.bins() {
        let bar = if peak == 0 {
            0
        } else {
            (count * BAR_WIDTH).div_ceil(peak)
        };
        out.push_str(&format!(
            "{lower:>8.1} - {upper:>8.1} | {:<width$} {count}\n",
            "#".repeat(bar),
            width = BAR_WIDTH
        ));
    }
    out
}
