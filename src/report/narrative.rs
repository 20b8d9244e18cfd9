//! Fixed text shown on the dashboard.

pub const DASHBOARD_TITLE: &str = "Bike Rent Analytic";

pub const SECTION_SUMMARY: &str = "Ringkasan Dataset";
pub const SECTION_BUSIEST_TIME: &str = "Waktu Paling Sibuk untuk Penyewaan";
pub const SECTION_WEATHER: &str = "Pengaruh Cuaca terhadap Penyewaan";
pub const SECTION_HOURLY_CORRELATION: &str = "Korelasi Antar Jam Dengan Penyewaan";
pub const SECTION_HOURLY_METRICS: &str = "Ringkasan Metrik (Hour)";
pub const SECTION_DAILY_CORRELATION: &str = "Korelasi Peminjaman Dengan Hari Libur";
pub const SECTION_DAILY_METRICS: &str = "Ringkasan Metrik";
pub const SECTION_RECOMMENDATIONS: &str = "Rekomendasi";

pub const METRIC_TOTAL: &str = "Total Penyewaan";
pub const METRIC_MEAN: &str = "Rata-rata Harian";
pub const METRIC_MAX: &str = "Penyewaan Tertinggi";

/// A titled list of recommendation bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

pub const BEST_TIME: Recommendation = Recommendation {
    title: "Waktu Terbaik untuk Penyewaan",
    points: &[
        "Jam tersibuk adalah pukul 17:00-18:00 (jam pulang kerja)",
        "Hari kerja (Senin-Jumat) memiliki penyewaan lebih tinggi",
        "Musim panas (Juni-September) adalah bulan tersibuk",
    ],
};

pub const INFLUENCING_FACTORS: Recommendation = Recommendation {
    title: "Faktor yang Mempengaruhi Penyewaan",
    points: &[
        "Cuaca cerah dan berawan ideal untuk penyewaan",
        "Suhu berkorelasi positif dengan jumlah penyewaan",
        "Kelembaban dan kecepatan angin berkorelasi negatif",
        "Hari kerja memiliki pola penyewaan yang lebih stabil",
    ],
};

pub const CONCLUSIONS: Recommendation = Recommendation {
    title: "Kesimpulan Utama",
    points: &[
        "Optimalkan persediaan sepeda pada jam sibuk (17:00-18:00)",
        "Tingkatkan layanan pada hari kerja dan musim panas",
        "Siapkan strategi khusus untuk kondisi cuaca buruk",
        "Pertimbangkan penambahan sepeda pada lokasi strategis dekat perkantoran",
    ],
};
