//! GraphQL documents owned by the proxy routes.
//!
//! Each route sends exactly one of these documents. The selected field sets
//! are part of the route contract: callers cannot widen them at runtime, and
//! changing one is a versioned change to the route.

/// `GET /products`: first 10 products with up to 5 variants and the first image.
pub const LIST_PRODUCTS: &str = r"
query listProducts {
  products(first: 10) {
    edges {
      node {
        id
        title
        description
        variants(first: 5) {
          edges {
            node {
              id
              price
              sku
              inventoryQuantity
            }
          }
        }
        images(first: 1) {
          edges {
            node {
              originalSrc
            }
          }
        }
      }
    }
  }
}
";

/// `GET /products/:id`: one product by global id, up to 5 variants and 5 images.
pub const GET_PRODUCT: &str = r"
query getProduct($id: ID!) {
  product(id: $id) {
    id
    title
    description
    variants(first: 5) {
      edges {
        node {
          id
          price
          sku
          inventoryQuantity
        }
      }
    }
    images(first: 5) {
      edges {
        node {
          originalSrc
        }
      }
    }
  }
}
";

/// `POST /products`
pub const CREATE_PRODUCT: &str = r"
mutation createProduct($input: ProductInput!) {
  productCreate(input: $input) {
    product {
      id
      title
      description
    }
    userErrors {
      field
      message
    }
  }
}
";

/// `PUT /products/:id`
pub const UPDATE_PRODUCT: &str = r"
mutation updateProduct($input: ProductInput!) {
  productUpdate(input: $input) {
    product {
      id
      title
      description
    }
    userErrors {
      field
      message
    }
  }
}
";

/// `DELETE /products/:id`
pub const DELETE_PRODUCT: &str = r"
mutation deleteProduct($input: ProductDeleteInput!) {
  productDelete(input: $input) {
    deletedProductId
    userErrors {
      field
      message
    }
  }
}
";

/// `GET /orders`: first 10 orders with totals, customer and up to 5 line items.
pub const LIST_ORDERS: &str = r"
query listOrders {
  orders(first: 10) {
    edges {
      node {
        id
        name
        totalPriceSet {
          shopMoney {
            amount
            currencyCode
          }
        }
        customer {
          firstName
          lastName
          email
        }
        lineItems(first: 5) {
          edges {
            node {
              title
              quantity
            }
          }
        }
      }
    }
  }
}
";
