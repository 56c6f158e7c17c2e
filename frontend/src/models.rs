// 重新导出shared crate的数据模型
pub use pedalswap_shared::Listing;

// =============== Mock 数据 ===============

/// A handful of listings for offline previews.
#[cfg(feature = "mock")]
pub fn get_mock_listings() -> Vec<Listing> {
    let samples = [
        ("Trail Bike", "Kona", "Process", "MTB", 2019, "M", "Good", "450"),
        ("Commuter", "Trek", "FX 2", "Hybrid", 2021, "L", "Like New", "520"),
        ("Gravel Grinder", "Salsa", "Warbird", "Gravel", 2020, "56cm", "Fair", "1100"),
        ("Road Racer", "Specialized", "Allez", "Road", 2018, "54cm", "Good", "600"),
    ];

    samples
        .into_iter()
        .zip(1u64..)
        .map(|((title, brand, model, kind, year, size, condition, price), id)| Listing {
            id,
            title: title.to_string(),
            brand: brand.to_string(),
            model: model.to_string(),
            kind: kind.to_string(),
            year,
            size: size.to_string(),
            condition: condition.to_string(),
            price: price.to_string(),
            description: format!(
                "{} {} {} in {} condition. Ridden around Portland, serviced this spring.",
                year,
                brand,
                model,
                condition.to_lowercase()
            ),
            components: None,
            wheelset: None,
            wheel_size: None,
            tire_size: None,
            // 偶数 id 带图，奇数 id 测试占位符
            images: if id % 2 == 0 {
                vec![format!("bike-{}.jpg", id)]
            } else {
                Vec::new()
            },
        })
        .collect()
}
