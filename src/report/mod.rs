pub mod table_csv;
pub mod text;

pub fn fraction(count: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    count as f32 / total as f32
}

pub fn format_f32_3(v: f32) -> String {
    format!("{:.3}", v)
}
