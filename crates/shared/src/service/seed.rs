use crate::{
    abstract_trait::{DynItemCommandRepository, DynItemQueryRepository},
    errors::ServiceError,
    model::Item as ItemModel,
};
use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

struct SampleItem {
    name: &'static str,
    category: &'static str,
    price: f64,
    qty: i64,
    description: &'static str,
    image: &'static str,
}

const SAMPLE_ITEMS: &[SampleItem] = &[
    SampleItem {
        name: "Espresso",
        category: "Hot Beverages",
        price: 3.99,
        qty: 100,
        description: "Rich and intense single shot of pure coffee. Our signature espresso is made with freshly ground premium coffee beans.",
        image: "espresso.jpg",
    },
    SampleItem {
        name: "Cappuccino",
        category: "Hot Beverages",
        price: 4.99,
        qty: 80,
        description: "Classic Italian coffee drink with equal parts espresso, steamed milk, and milk foam. Perfect balance of flavor and texture.",
        image: "cappuccino.jpg",
    },
    SampleItem {
        name: "Latte",
        category: "Hot Beverages",
        price: 5.49,
        qty: 75,
        description: "Smooth and creamy coffee with more steamed milk than a cappuccino. Available with flavor shots for a personalized touch.",
        image: "latte.jpg",
    },
    SampleItem {
        name: "Americano",
        category: "Hot Beverages",
        price: 3.49,
        qty: 90,
        description: "Espresso diluted with hot water for a milder coffee experience. Strong but not as intense as an espresso.",
        image: "americano.jpg",
    },
    SampleItem {
        name: "Iced Coffee",
        category: "Cold Beverages",
        price: 4.29,
        qty: 65,
        description: "Chilled coffee served over ice. Refreshing and perfect for warm days. Can be customized with various syrups.",
        image: "iced-coffee.jpg",
    },
    SampleItem {
        name: "Caramel Frappuccino",
        category: "Cold Beverages",
        price: 5.99,
        qty: 50,
        description: "Blended coffee drink with ice, milk, caramel syrup, topped with whipped cream and caramel drizzle.",
        image: "caramel-frappuccino.jpg",
    },
    SampleItem {
        name: "Chai Tea Latte",
        category: "Hot Beverages",
        price: 4.79,
        qty: 60,
        description: "Spiced black tea mixed with steamed milk for a warm, comforting beverage with exotic flavors.",
        image: "chai-tea-latte.jpg",
    },
    SampleItem {
        name: "Chocolate Croissant",
        category: "Pastries",
        price: 3.29,
        qty: 40,
        description: "Buttery, flaky croissant filled with rich chocolate. Baked fresh daily for maximum freshness.",
        image: "chocolate-croissant.jpg",
    },
    SampleItem {
        name: "Blueberry Muffin",
        category: "Pastries",
        price: 2.99,
        qty: 45,
        description: "Moist muffin loaded with juicy blueberries. A perfect companion to your morning coffee.",
        image: "blueberry-muffin.jpg",
    },
    SampleItem {
        name: "Cinnamon Roll",
        category: "Pastries",
        price: 3.49,
        qty: 35,
        description: "Sweet pastry roll with layers of cinnamon and topped with cream cheese frosting. Freshly baked every morning.",
        image: "cinnamon-roll.jpg",
    },
    SampleItem {
        name: "Caesar Salad",
        category: "Food",
        price: 8.99,
        qty: 25,
        description: "Fresh romaine lettuce, croutons, parmesan cheese, and grilled chicken with our house caesar dressing.",
        image: "caesar-salad.jpg",
    },
    SampleItem {
        name: "Turkey Sandwich",
        category: "Food",
        price: 9.49,
        qty: 30,
        description: "Sliced turkey breast with lettuce, tomato, and mayo on your choice of bread. Served with a side of chips.",
        image: "turkey-sandwich.jpg",
    },
    SampleItem {
        name: "Coffee Bean Bag - Dark Roast",
        category: "Retail",
        price: 14.99,
        qty: 20,
        description: "250g bag of our premium dark roast coffee beans. Intense flavor with chocolate and nutty notes.",
        image: "coffee-beans-dark.jpg",
    },
    SampleItem {
        name: "Ceramic Coffee Mug",
        category: "Retail",
        price: 12.99,
        qty: 15,
        description: "High-quality ceramic mug with our coffee shop logo. Microwave and dishwasher safe.",
        image: "ceramic-mug.jpg",
    },
    SampleItem {
        name: "Reusable Coffee Cup",
        category: "Retail",
        price: 19.99,
        qty: 25,
        description: "Eco-friendly reusable travel cup. Double-walled for insulation. Comes with a secure lid.",
        image: "reusable-cup.jpg",
    },
];

/// Fills an empty item table with the sample coffee menu. The image names are
/// placeholders and are not backed by object storage.
///
/// Returns the number of items written; a non-empty table is left alone.
pub async fn seed_sample_items(
    query: &DynItemQueryRepository,
    command: &DynItemCommandRepository,
) -> Result<usize, ServiceError> {
    if !query.find_all().await?.is_empty() {
        info!("🌱 Item table already populated, skipping sample data");
        return Ok(0);
    }

    let mut written = 0;
    for sample in SAMPLE_ITEMS {
        let now = Utc::now();
        let item = ItemModel {
            id: Uuid::new_v4().to_string(),
            item_name: sample.name.to_string(),
            item_category: sample.category.to_string(),
            item_price: sample.price,
            item_qty: sample.qty,
            item_description: sample.description.to_string(),
            item_image: Some(sample.image.to_string()),
            is_s3_image: false,
            created_at: now,
            updated_at: now,
        };

        match command.create_item(&item).await {
            Ok(_) => written += 1,
            Err(e) => error!("❌ Failed to add sample item {}: {e}", sample.name),
        }
    }

    info!("🌱 Seeded {written} sample items");
    Ok(written)
}
