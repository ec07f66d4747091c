//! Bundled demo catalog, used when no catalog file is configured.

use crate::product::{Price, Product, ProductId};
use crate::taxonomy::{Activity, Category, Goal};

/// Demo products in display order.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product::new(ProductId(1), "Whey Protein Gold", Price::from_cents(5_999))
            .with_description("Proteína de suero con 24 g por servicio y bajo en azúcar.")
            .with_rating(5, 324)
            .with_category(Category::Proteinas)
            .with_goal(Goal::Muscle)
            .with_activity(Activity::Gym)
            .with_tag("Más vendido")
            .with_image("/img/products/whey-gold.webp"),
        Product::new(ProductId(2), "Isolate Zero", Price::from_cents(6_899))
            .with_description("Aislado de proteína sin lactosa, ideal para definición.")
            .with_rating(4, 187)
            .with_category(Category::Proteinas)
            .with_goal(Goal::WeightLoss)
            .with_activity(Activity::Crossfit)
            .with_image("/img/products/isolate-zero.webp"),
        Product::new(ProductId(3), "Explosive Pre", Price::from_cents(3_499))
            .with_description("Pre-entreno con cafeína, beta-alanina y citrulina.")
            .with_rating(4, 96)
            .with_category(Category::PreEntreno)
            .with_goal(Goal::Energy)
            .with_activity(Activity::Crossfit)
            .with_tag("Nuevo")
            .with_image("/img/products/explosive-pre.webp"),
        Product::new(ProductId(4), "Recovery Max", Price::from_cents(3_999))
            .with_description("Carbohidratos y proteína para recuperar después de entrenar.")
            .with_rating(4, 58)
            .with_category(Category::PostEntreno)
            .with_goal(Goal::Recovery)
            .with_activity(Activity::Running)
            .with_image("/img/products/recovery-max.webp"),
        Product::new(ProductId(5), "Multivitamínico Daily", Price::from_cents(1_999))
            .with_description("Vitaminas y minerales esenciales en una cápsula diaria.")
            .with_rating(5, 412)
            .with_category(Category::Vitaminas)
            .with_goal(Goal::Health)
            .with_image("/img/products/multi-daily.webp"),
        Product::new(ProductId(6), "BCAA 2:1:1", Price::from_cents(2_799))
            .with_description("Aminoácidos de cadena ramificada sabor limón.")
            .with_rating(4, 143)
            .with_category(Category::Aminoacidos)
            .with_goal(Goal::Recovery)
            .with_activity(Activity::Cycling)
            .with_image("/img/products/bcaa-211.webp"),
        Product::new(ProductId(7), "Thermo Burn", Price::from_cents(3_299))
            .with_description("Termogénico con té verde y L-carnitina.")
            .with_rating(3, 77)
            .with_category(Category::Quemadores)
            .with_goal(Goal::WeightLoss)
            .with_activity(Activity::Running)
            .with_tag("Oferta")
            .with_image("/img/products/thermo-burn.webp"),
        Product::new(ProductId(8), "Creatina Monohidratada", Price::from_cents(2_499))
            .with_description("Creatina micronizada pura, 5 g por servicio.")
            .with_rating(5, 538)
            .with_category(Category::Creatinas)
            .with_goal(Goal::Performance)
            .with_activity(Activity::Gym)
            .with_tag("Más vendido")
            .with_image("/img/products/creatina-mono.webp"),
        Product::new(ProductId(9), "Caseína Night", Price::from_cents(5_499))
            .with_description("Proteína de liberación lenta para la noche.")
            .with_rating(4, 65)
            .with_category(Category::Proteinas)
            .with_goal(Goal::Muscle)
            .with_activity(Activity::Gym)
            .with_image("/img/products/casein-night.webp"),
        Product::new(ProductId(10), "Electrolitos Pro", Price::from_cents(1_599))
            .with_description("Sales minerales para entrenamientos largos.")
            .with_rating(4, 89)
            .with_category(Category::Aminoacidos)
            .with_goal(Goal::Performance)
            .with_activity(Activity::Swimming)
            .with_image("/img/products/electrolitos-pro.webp"),
        Product::new(ProductId(11), "Vitamina D3 + K2", Price::from_cents(1_299))
            .with_description("Apoyo para huesos y sistema inmune.")
            .with_rating(5, 203)
            .with_category(Category::Vitaminas)
            .with_goal(Goal::Health)
            .with_image("/img/products/d3-k2.webp"),
        Product::new(ProductId(12), "Pump Nitro", Price::from_cents(3_799))
            .with_description("Óxido nítrico para congestión muscular sin estimulantes.")
            .with_rating(4, 44)
            .with_category(Category::PreEntreno)
            .with_goal(Goal::Performance)
            .with_activity(Activity::TeamSports)
            .with_image("/img/products/pump-nitro.webp"),
        Product::new(ProductId(13), "Glutamina Recovery", Price::from_cents(2_199))
            .with_description("L-glutamina pura para recuperación muscular.")
            .with_rating(4, 71)
            .with_category(Category::PostEntreno)
            .with_goal(Goal::Recovery)
            .with_activity(Activity::TeamSports)
            .with_image("/img/products/glutamina.webp"),
        Product::new(ProductId(14), "Creatina HCL", Price::from_cents(2_999))
            .with_description("Creatina de alta solubilidad, sin fase de carga.")
            .with_rating(4, 112)
            .with_category(Category::Creatinas)
            .with_goal(Goal::Muscle)
            .with_activity(Activity::Crossfit)
            .with_image("/img/products/creatina-hcl.webp"),
    ]
}
